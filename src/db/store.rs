use async_trait::async_trait;
use sqlx::PgPool;

use crate::{
    error::{AppError, AppResult},
    models::{CollectionDoc, GameSet, UserProfile},
};

/// Read-only handle over the document store's three logical collections
///
/// Every query is an equality lookup on the user identifier; the store's
/// schema guarantees at most one document per user per collection. The
/// trait is the seam: routes and services receive an injected handle and
/// never touch a process-wide client.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetches the user-details document for a user, if one exists
    async fn fetch_profile(&self, user_id: &str) -> AppResult<Option<UserProfile>>;

    /// Fetches the set of game ids in the user's owned collection
    ///
    /// A missing document reads as an empty set.
    async fn owned_games(&self, user_id: &str) -> AppResult<GameSet>;

    /// Fetches the set of game ids in the user's wishlist collection
    ///
    /// A missing document reads as an empty set.
    async fn wishlist(&self, user_id: &str) -> AppResult<GameSet>;
}

/// Postgres-backed document store
///
/// Each logical collection is one table of `(user_id, doc)` rows with the
/// document body held as jsonb, mirroring the hosted store's shape. The
/// `user_id` primary key realizes the one-document-per-user invariant.
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetches one user's raw document from the given collection table
    async fn fetch_doc(&self, table: &str, user_id: &str) -> AppResult<Option<serde_json::Value>> {
        let query = format!("SELECT doc FROM {} WHERE user_id = $1", table);

        let doc: Option<serde_json::Value> = sqlx::query_scalar(&query)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(doc)
    }

    /// Fetches a collection document and converts it to its id set
    async fn fetch_game_set(&self, table: &str, user_id: &str) -> AppResult<GameSet> {
        let Some(doc) = self.fetch_doc(table, user_id).await? else {
            return Ok(GameSet::default());
        };

        let collection: CollectionDoc = serde_json::from_value(doc).map_err(|e| {
            AppError::Internal(format!("Malformed {} document for {}: {}", table, user_id, e))
        })?;

        Ok(GameSet::from(collection))
    }
}

#[async_trait]
impl DocumentStore for PostgresStore {
    async fn fetch_profile(&self, user_id: &str) -> AppResult<Option<UserProfile>> {
        let Some(doc) = self.fetch_doc("user_details", user_id).await? else {
            return Ok(None);
        };

        let profile: UserProfile = serde_json::from_value(doc).map_err(|e| {
            AppError::Internal(format!("Malformed profile document for {}: {}", user_id, e))
        })?;

        Ok(Some(profile))
    }

    async fn owned_games(&self, user_id: &str) -> AppResult<GameSet> {
        self.fetch_game_set("owned_games", user_id).await
    }

    async fn wishlist(&self, user_id: &str) -> AppResult<GameSet> {
        self.fetch_game_set("wishlists", user_id).await
    }
}
