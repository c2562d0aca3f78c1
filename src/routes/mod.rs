use axum::{
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};
use crate::state::AppState;

pub mod games;
pub mod profiles;

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(axum::middleware::from_fn(request_id_middleware))
        // Browser clients call this API from their own origins
        .layer(CorsLayer::permissive())
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/games", get(games::browse))
        .route("/games/upcoming", get(games::upcoming))
        .route("/games/popular", get(games::popular))
        .route("/games/search", get(games::search))
        .route("/games/paginated", get(games::paginated))
        .route("/games/:slug", get(games::details))
        .route("/games/:slug/screenshots", get(games::screenshots))
        .route("/genres", get(games::genres))
        .route("/platforms", get(games::platforms))
        .route("/users/:user_id/profile", get(profiles::view))
        .route("/users/:user_id/collections/owned", get(profiles::owned))
        .route("/users/:user_id/collections/wishlist", get(profiles::wishlist))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
