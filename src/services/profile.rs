use std::sync::Arc;

use crate::{
    db::DocumentStore,
    models::{ProfileLookup, ProfileView},
};

/// Produces the display-ready profile for one user
///
/// Joins the user-details document with the owned and wishlist collections
/// and recomputes the collection counters from the id sets. The three reads
/// are independent and issued concurrently; nothing is surfaced until all
/// of them settle, so a partial profile can never escape.
///
/// Stateless by contract: every invocation re-fetches all three documents.
pub async fn aggregate_profile(store: Arc<dyn DocumentStore>, user_id: &str) -> ProfileLookup {
    let (profile, owned, wishlist) = tokio::join!(
        store.fetch_profile(user_id),
        store.owned_games(user_id),
        store.wishlist(user_id),
    );

    let (profile, owned, wishlist) = match (profile, owned, wishlist) {
        (Ok(profile), Ok(owned), Ok(wishlist)) => (profile, owned, wishlist),
        (profile, owned, wishlist) => {
            let error = [
                profile.err().map(|e| e.to_string()),
                owned.err().map(|e| e.to_string()),
                wishlist.err().map(|e| e.to_string()),
            ]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join("; ");

            tracing::error!(user_id = %user_id, error = %error, "Profile aggregation failed");
            return ProfileLookup::FetchError;
        }
    };

    let Some(profile) = profile else {
        tracing::debug!(user_id = %user_id, "No profile document for user");
        return ProfileLookup::NotFound;
    };

    let view = ProfileView::from_parts(profile, owned.len(), wishlist.len());

    tracing::info!(
        user_id = %user_id,
        games_owned = view.games_owned,
        wishlisted = view.games_lent,
        "Profile aggregated"
    );

    ProfileLookup::Found(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MockDocumentStore;
    use crate::error::AppError;
    use crate::models::{GameSet, UserProfile};

    fn stored_profile(user_id: &str) -> UserProfile {
        UserProfile {
            user_id: user_id.to_string(),
            first_name: "Sam".to_string(),
            last_name: "Porter".to_string(),
            location: "Knot City".to_string(),
            avatar_url: "https://media.example/sam.png".to_string(),
            platforms: vec!["PlayStation 5".to_string()],
            nickname: "porter".to_string(),
            about_me: "Deliveries.".to_string(),
            games_owned: 77,
            games_lent: 77,
            games_borrowed: 1,
        }
    }

    fn game_set(ids: &[&str]) -> GameSet {
        ids.iter().map(|id| id.to_string()).collect()
    }

    fn mock_store(
        profile: Option<UserProfile>,
        owned: GameSet,
        wishlist: GameSet,
    ) -> Arc<dyn DocumentStore> {
        let mut store = MockDocumentStore::new();
        store
            .expect_fetch_profile()
            .returning(move |_| Ok(profile.clone()));
        store.expect_owned_games().returning(move |_| Ok(owned.clone()));
        store.expect_wishlist().returning(move |_| Ok(wishlist.clone()));
        Arc::new(store)
    }

    #[tokio::test]
    async fn test_counts_overwrite_stored_counters() {
        let store = mock_store(
            Some(stored_profile("u-1")),
            game_set(&["3498", "802", "41494"]),
            game_set(&[]),
        );

        let lookup = aggregate_profile(store, "u-1").await;

        let ProfileLookup::Found(view) = lookup else {
            panic!("expected Found, got {:?}", lookup);
        };
        assert_eq!(view.games_owned, 3);
        assert_eq!(view.games_lent, 0);
        assert_eq!(view.games_borrowed, 1);
    }

    #[tokio::test]
    async fn test_missing_profile_is_not_found() {
        let store = mock_store(None, game_set(&["3498"]), game_set(&["802"]));

        let lookup = aggregate_profile(store, "u-missing").await;
        assert_eq!(lookup, ProfileLookup::NotFound);
    }

    #[tokio::test]
    async fn test_read_failure_is_fetch_error_not_not_found() {
        let mut store = MockDocumentStore::new();
        store
            .expect_fetch_profile()
            .returning(|user_id| Ok(Some(stored_profile(user_id))));
        store
            .expect_owned_games()
            .returning(|_| Err(AppError::Internal("store unreachable".to_string())));
        store.expect_wishlist().returning(|_| Ok(GameSet::default()));

        let lookup = aggregate_profile(Arc::new(store), "u-1").await;
        assert_eq!(lookup, ProfileLookup::FetchError);
    }

    #[tokio::test]
    async fn test_aggregation_is_idempotent() {
        let store = mock_store(
            Some(stored_profile("u-1")),
            game_set(&["a", "b"]),
            game_set(&["c", "d", "e"]),
        );

        let first = aggregate_profile(store.clone(), "u-1").await;
        let second = aggregate_profile(store, "u-1").await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_wishlist_count_lands_in_games_lent() {
        let store = mock_store(
            Some(stored_profile("u-1")),
            game_set(&[]),
            game_set(&["10", "20", "30", "40"]),
        );

        let lookup = aggregate_profile(store, "u-1").await;

        let ProfileLookup::Found(view) = lookup else {
            panic!("expected Found, got {:?}", lookup);
        };
        assert_eq!(view.games_owned, 0);
        assert_eq!(view.games_lent, 4);
    }
}
