use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::{ProfileLookup, ProfileView},
    services::aggregate_profile,
    state::AppState,
};

/// Handler for the aggregated profile view
///
/// The three lookup outcomes keep their own status codes: a user that does
/// not exist is a 404, a failed backing read is a 502.
pub async fn view(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<ProfileView>> {
    match aggregate_profile(state.store.clone(), &user_id).await {
        ProfileLookup::Found(view) => Ok(Json(view)),
        ProfileLookup::NotFound => Err(AppError::NotFound(format!(
            "User profile not found: {}",
            user_id
        ))),
        ProfileLookup::FetchError => Err(AppError::ExternalApi(
            "Profile lookup failed".to_string(),
        )),
    }
}

/// Handler for the owned-collection membership list
pub async fn owned(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<String>>> {
    let set = state.store.owned_games(&user_id).await?;
    Ok(Json(set.into_vec()))
}

/// Handler for the wishlist membership list
pub async fn wishlist(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<String>>> {
    let set = state.store.wishlist(&user_id).await?;
    Ok(Json(set.into_vec()))
}
