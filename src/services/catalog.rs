use chrono::NaiveDate;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{GamePage, GameRecord, GenreRecord, PlatformRecord, Screenshot},
};

/// Ordering applied to the curated game listings
const MOST_ADDED_ORDERING: &str = "-added";

/// Envelope shared by the catalog's list endpoints
#[derive(Debug, Deserialize)]
struct ResultsPage<T> {
    results: Vec<T>,
}

/// Client for the external game catalog service
///
/// Translates typed request parameters into single HTTP GETs with the API
/// key carried as a query parameter. Every call is one best-effort request:
/// no retry, no caching, no rate limiting.
#[derive(Clone)]
pub struct CatalogClient {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    upcoming_window: (NaiveDate, NaiveDate),
}

impl CatalogClient {
    pub fn new(api_key: String, api_url: String, upcoming_window: (NaiveDate, NaiveDate)) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
            upcoming_window,
        }
    }

    /// Fetches one page of games from `/games` with the given extra clauses
    ///
    /// `query` is a pre-assembled `&name=value` clause string; the optional
    /// platform filter rides along as its own parameter.
    async fn fetch_games(&self, query: &str, platforms: Option<&str>) -> AppResult<Vec<GameRecord>> {
        let url = format!("{}/games?key={}{}", self.api_url, self.api_key, query);

        let mut request = self.http_client.get(&url);
        if let Some(platforms) = platforms {
            request = request.query(&[("platforms", platforms)]);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Catalog API returned status {}: {}",
                status, body
            )));
        }

        let page: GamePage = response.json().await?;
        Ok(page.results)
    }

    /// Games releasing inside the configured upcoming window, most added first
    pub async fn upcoming_games(&self, platforms: Option<&str>) -> AppResult<Vec<GameRecord>> {
        let (start, end) = self.upcoming_window;
        let query = format!("&dates={},{}&ordering={}", start, end, MOST_ADDED_ORDERING);
        self.fetch_games(&query, platforms).await
    }

    /// The catalog's most-added games
    pub async fn popular_games(&self, platforms: Option<&str>) -> AppResult<Vec<GameRecord>> {
        let query = format!("&ordering={}", MOST_ADDED_ORDERING);
        self.fetch_games(&query, platforms).await
    }

    /// An unfiltered page of the catalog
    pub async fn all_games(&self) -> AppResult<Vec<GameRecord>> {
        self.fetch_games("", None).await
    }

    /// Browse by genre and platform with optional pagination
    ///
    /// Filters combine with logical AND at the service. A filter whose input
    /// is empty (or whose first value is empty) is omitted entirely.
    pub async fn games_by_genre(
        &self,
        genres: Option<&[String]>,
        platforms: Option<&[String]>,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> AppResult<Vec<GameRecord>> {
        let query = browse_query(genres, platforms, page, page_size);
        self.fetch_games(&query, None).await
    }

    /// Full-text search against the catalog
    pub async fn search_games(&self, term: &str) -> AppResult<Vec<GameRecord>> {
        if term.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search term cannot be empty".to_string(),
            ));
        }

        let url = format!("{}/games?key={}", self.api_url, self.api_key);
        let response = self
            .http_client
            .get(&url)
            .query(&[("search", term)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Catalog API returned status {}: {}",
                status, body
            )));
        }

        let page: GamePage = response.json().await?;

        tracing::info!(
            term = %term,
            results = page.results.len(),
            "Game search completed"
        );

        Ok(page.results)
    }

    /// Fetches one game by slug
    ///
    /// Any failure surfaces as a not-found error naming the slug; the
    /// catalog's 404s are indistinguishable from transport failures here.
    pub async fn game_details(&self, slug: &str) -> AppResult<GameRecord> {
        let url = format!("{}/games/{}?key={}", self.api_url, slug, self.api_key);

        match self.get_json::<GameRecord>(&url).await {
            Ok(game) => Ok(game),
            Err(e) => {
                tracing::error!(slug = %slug, error = %e, "Game detail fetch failed");
                Err(AppError::NotFound(format!(
                    "Unable to fetch details for game: {}",
                    slug
                )))
            }
        }
    }

    /// The catalog's genre taxonomy
    pub async fn genres(&self) -> AppResult<Vec<GenreRecord>> {
        let url = format!("{}/genres?key={}", self.api_url, self.api_key);

        match self.get_json::<ResultsPage<GenreRecord>>(&url).await {
            Ok(page) => Ok(page.results),
            Err(e) => {
                tracing::error!(error = %e, "Genre list fetch failed");
                Err(AppError::ExternalApi("Error finding genres".to_string()))
            }
        }
    }

    /// The catalog's platform taxonomy
    pub async fn platforms(&self) -> AppResult<Vec<PlatformRecord>> {
        let url = format!("{}/platforms?key={}", self.api_url, self.api_key);

        match self.get_json::<ResultsPage<PlatformRecord>>(&url).await {
            Ok(page) => Ok(page.results),
            Err(e) => {
                tracing::error!(error = %e, "Platform list fetch failed");
                Err(AppError::ExternalApi("Error finding platforms".to_string()))
            }
        }
    }

    /// Screenshots for one game, in the catalog's order
    ///
    /// Never fails: screenshots decorate a page that renders fine without
    /// them, so any failure is logged and an empty sequence returned.
    pub async fn game_screenshots(&self, game_id: u64) -> Vec<Screenshot> {
        let url = format!("{}/games/{}/screenshots?key={}", self.api_url, game_id, self.api_key);

        match self.get_json::<ResultsPage<Screenshot>>(&url).await {
            Ok(page) => page.results,
            Err(e) => {
                tracing::warn!(game_id, error = %e, "Screenshot fetch failed, returning none");
                Vec::new()
            }
        }
    }

    /// Offset-based pagination over the full catalog
    ///
    /// Returns the raw response envelope so callers see the total count and
    /// the service's own next/previous cursors.
    pub async fn paginated_games(&self, page: u32, items_per_page: u32) -> AppResult<GamePage> {
        let offset = page_offset(page, items_per_page);
        let url = format!(
            "{}/games?key={}&offset={}&limit={}",
            self.api_url, self.api_key, offset, items_per_page
        );

        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Catalog API returned status {}: {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }

    /// Single GET returning decoded JSON, with non-2xx folded into the error
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> AppResult<T> {
        let response = self.http_client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Catalog API returned status {}: {}",
                status, body
            )));
        }

        Ok(response.json().await?)
    }
}

/// Builds one `&name=a,b,c` filter clause, lower-cased
///
/// Returns the empty string when the input is absent, empty, or leads with
/// an empty value, so the clause disappears from the query entirely.
fn filter_clause(name: &str, values: Option<&[String]>) -> String {
    match values {
        Some(values) if !values.is_empty() && !values[0].is_empty() => {
            format!("&{}={}", name, values.join(",").to_lowercase())
        }
        _ => String::new(),
    }
}

/// Assembles the browse query: genre and platform filters plus pagination
fn browse_query(
    genres: Option<&[String]>,
    platforms: Option<&[String]>,
    page: Option<u32>,
    page_size: Option<u32>,
) -> String {
    let mut query = String::new();
    query.push_str(&filter_clause("genres", genres));
    query.push_str(&filter_clause("platforms", platforms));

    if let Some(page) = page {
        query.push_str(&format!("&page={}", page));
    }
    if let Some(page_size) = page_size {
        query.push_str(&format!("&page_size={}", page_size));
    }

    query
}

/// Offset for one-based page numbers
fn page_offset(page: u32, items_per_page: u32) -> u32 {
    page.saturating_sub(1) * items_per_page
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unreachable_client() -> CatalogClient {
        // Port 1 is never bound in test environments, so every request
        // fails at connect time.
        CatalogClient::new(
            "test_key".to_string(),
            "http://127.0.0.1:1".to_string(),
            (
                NaiveDate::from_ymd_opt(2025, 3, 26).unwrap(),
                NaiveDate::from_ymd_opt(2025, 6, 26).unwrap(),
            ),
        )
    }

    #[test]
    fn test_filter_clause_omitted_for_none() {
        assert_eq!(filter_clause("genres", None), "");
    }

    #[test]
    fn test_filter_clause_omitted_for_empty_slice() {
        assert_eq!(filter_clause("genres", Some(&[])), "");
    }

    #[test]
    fn test_filter_clause_omitted_for_leading_empty_value() {
        let values = vec!["".to_string()];
        assert_eq!(filter_clause("genres", Some(&values)), "");
    }

    #[test]
    fn test_filter_clause_joins_and_lowercases() {
        let values = vec!["Action".to_string(), "Indie".to_string()];
        assert_eq!(
            filter_clause("genres", Some(&values)),
            "&genres=action,indie"
        );
    }

    #[test]
    fn test_browse_query_with_all_parameters() {
        let genres = vec!["Action".to_string(), "RPG".to_string()];
        let platforms = vec!["4".to_string()];

        let query = browse_query(Some(&genres), Some(&platforms), Some(2), Some(20));
        assert_eq!(query, "&genres=action,rpg&platforms=4&page=2&page_size=20");
    }

    #[test]
    fn test_browse_query_each_clause_appears_once() {
        let genres = vec!["Indie".to_string()];
        let query = browse_query(Some(&genres), None, None, None);

        assert_eq!(query.matches("&genres=").count(), 1);
        assert_eq!(query, "&genres=indie");
    }

    #[test]
    fn test_browse_query_omits_empty_filters() {
        let empty = vec!["".to_string()];
        let query = browse_query(Some(&empty), Some(&[]), Some(1), None);

        assert!(!query.contains("&genres="));
        assert!(!query.contains("&platforms="));
        assert_eq!(query, "&page=1");
    }

    #[test]
    fn test_page_offset() {
        assert_eq!(page_offset(1, 20), 0);
        assert_eq!(page_offset(2, 20), 20);
        assert_eq!(page_offset(3, 20), 40);
        assert_eq!(page_offset(5, 12), 48);
    }

    #[test]
    fn test_page_offset_page_zero_clamps() {
        assert_eq!(page_offset(0, 20), 0);
    }

    #[tokio::test]
    async fn test_screenshots_never_fail() {
        let client = unreachable_client();
        let shots = client.game_screenshots(3498).await;
        assert!(shots.is_empty());
    }

    #[tokio::test]
    async fn test_game_details_failure_names_slug() {
        let client = unreachable_client();
        let err = client.game_details("hollow-knight").await.unwrap_err();

        match err {
            AppError::NotFound(msg) => assert!(msg.contains("hollow-knight")),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_genre_lookup_failure_is_generic() {
        let client = unreachable_client();
        let err = client.genres().await.unwrap_err();

        match err {
            AppError::ExternalApi(msg) => assert_eq!(msg, "Error finding genres"),
            other => panic!("expected ExternalApi, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_search_rejects_empty_term() {
        let client = unreachable_client();
        let err = client.search_games("   ").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}
