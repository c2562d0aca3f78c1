use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    error::AppResult,
    models::{GamePage, GameRecord, GenreRecord, PlatformRecord, Screenshot},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct PlatformFilter {
    platforms: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BrowseQuery {
    genres: Option<String>,
    platforms: Option<String>,
    page: Option<u32>,
    page_size: Option<u32>,
}

impl BrowseQuery {
    fn is_unfiltered(&self) -> bool {
        self.genres.is_none()
            && self.platforms.is_none()
            && self.page.is_none()
            && self.page_size.is_none()
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    q: String,
}

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    page: u32,
    #[serde(default = "default_page_size")]
    page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    20
}

/// Splits a comma-separated query value into filter values
///
/// An empty parameter yields a single empty value, which the client then
/// drops, so `?genres=` behaves exactly like an absent parameter.
fn split_filter(raw: Option<String>) -> Option<Vec<String>> {
    raw.map(|s| s.split(',').map(str::to_string).collect())
}

/// Handler for catalog browsing: unfiltered, or by genre/platform with
/// optional pagination
pub async fn browse(
    State(state): State<AppState>,
    Query(params): Query<BrowseQuery>,
) -> AppResult<Json<Vec<GameRecord>>> {
    let games = if params.is_unfiltered() {
        state.catalog.all_games().await?
    } else {
        let genres = split_filter(params.genres);
        let platforms = split_filter(params.platforms);
        state
            .catalog
            .games_by_genre(
                genres.as_deref(),
                platforms.as_deref(),
                params.page,
                params.page_size,
            )
            .await?
    };

    Ok(Json(games))
}

/// Handler for the upcoming-releases listing
pub async fn upcoming(
    State(state): State<AppState>,
    Query(params): Query<PlatformFilter>,
) -> AppResult<Json<Vec<GameRecord>>> {
    let games = state
        .catalog
        .upcoming_games(params.platforms.as_deref())
        .await?;
    Ok(Json(games))
}

/// Handler for the most-added listing
pub async fn popular(
    State(state): State<AppState>,
    Query(params): Query<PlatformFilter>,
) -> AppResult<Json<Vec<GameRecord>>> {
    let games = state
        .catalog
        .popular_games(params.platforms.as_deref())
        .await?;
    Ok(Json(games))
}

/// Handler for full-text game search
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Vec<GameRecord>>> {
    let games = state.catalog.search_games(&params.q).await?;
    Ok(Json(games))
}

/// Handler for offset-based pagination; returns the raw catalog envelope
pub async fn paginated(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> AppResult<Json<GamePage>> {
    let page = state
        .catalog
        .paginated_games(params.page, params.page_size)
        .await?;
    Ok(Json(page))
}

/// Handler for single-game details by slug
pub async fn details(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<GameRecord>> {
    let game = state.catalog.game_details(&slug).await?;
    Ok(Json(game))
}

/// Handler for a game's screenshots; always succeeds, possibly empty
pub async fn screenshots(
    State(state): State<AppState>,
    Path(game_id): Path<u64>,
) -> Json<Vec<Screenshot>> {
    Json(state.catalog.game_screenshots(game_id).await)
}

/// Handler for the genre taxonomy
pub async fn genres(State(state): State<AppState>) -> AppResult<Json<Vec<GenreRecord>>> {
    Ok(Json(state.catalog.genres().await?))
}

/// Handler for the platform taxonomy
pub async fn platforms(State(state): State<AppState>) -> AppResult<Json<Vec<PlatformRecord>>> {
    Ok(Json(state.catalog.platforms().await?))
}
