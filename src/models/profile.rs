use serde::{Deserialize, Serialize};

/// A user's profile document as stored in the user-details collection
///
/// Field names stay camelCase on the wire to match what the browser client
/// and the store already use. Read-only here: profile writes happen through
/// the account-setup flow, which is not part of this service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub location: String,
    pub avatar_url: String,
    #[serde(default)]
    pub platforms: Vec<String>,
    pub nickname: String,
    pub about_me: String,
    #[serde(default)]
    pub games_owned: u32,
    #[serde(default)]
    pub games_lent: u32,
    #[serde(default)]
    pub games_borrowed: u32,
}

/// Display-ready profile: the stored document with counters recomputed
/// from the owned and wishlist collections
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub location: String,
    pub avatar_url: String,
    pub platforms: Vec<String>,
    pub nickname: String,
    pub about_me: String,
    pub games_owned: u32,
    /// Carries the wishlist count: the profile page renders this field as
    /// its "Wishlisted Games" figure, and a lending feature elsewhere may
    /// still own the name.
    pub games_lent: u32,
    pub games_borrowed: u32,
}

impl ProfileView {
    /// Merges a stored profile with freshly computed collection counts
    ///
    /// The computed counts overwrite whatever counters the document carried.
    pub fn from_parts(profile: UserProfile, owned_count: usize, wishlist_count: usize) -> Self {
        Self {
            user_id: profile.user_id,
            first_name: profile.first_name,
            last_name: profile.last_name,
            location: profile.location,
            avatar_url: profile.avatar_url,
            platforms: profile.platforms,
            nickname: profile.nickname,
            about_me: profile.about_me,
            games_owned: owned_count as u32,
            games_lent: wishlist_count as u32,
            games_borrowed: profile.games_borrowed,
        }
    }
}

/// Outcome of a profile aggregation
///
/// Keeps "no such user" distinguishable from "a backing read failed" so
/// callers are never forced to conflate the two.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileLookup {
    Found(ProfileView),
    NotFound,
    FetchError,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> UserProfile {
        UserProfile {
            user_id: "u-42".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            location: "London".to_string(),
            avatar_url: "https://media.example/ada.png".to_string(),
            platforms: vec!["PlayStation 5".to_string(), "Switch".to_string()],
            nickname: "ada_l".to_string(),
            about_me: "Analytical engines and roguelikes.".to_string(),
            games_owned: 99,
            games_lent: 99,
            games_borrowed: 2,
        }
    }

    #[test]
    fn test_profile_camel_case_wire_format() {
        let json = r#"{
            "userId": "u-42",
            "firstName": "Ada",
            "lastName": "Lovelace",
            "location": "London",
            "avatarUrl": "https://media.example/ada.png",
            "platforms": ["Switch"],
            "nickname": "ada_l",
            "aboutMe": "hi",
            "gamesOwned": 3,
            "gamesLent": 1,
            "gamesBorrowed": 0
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.user_id, "u-42");
        assert_eq!(profile.avatar_url, "https://media.example/ada.png");
        assert_eq!(profile.games_owned, 3);
    }

    #[test]
    fn test_profile_missing_counters_default_to_zero() {
        let json = r#"{
            "userId": "u-7",
            "firstName": "Grace",
            "lastName": "Hopper",
            "location": "NYC",
            "avatarUrl": "https://media.example/grace.png",
            "nickname": "amazing_grace",
            "aboutMe": ""
        }"#;

        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.games_owned, 0);
        assert_eq!(profile.games_lent, 0);
        assert_eq!(profile.games_borrowed, 0);
        assert!(profile.platforms.is_empty());
    }

    #[test]
    fn test_view_overwrites_stored_counters() {
        let view = ProfileView::from_parts(sample_profile(), 3, 0);

        assert_eq!(view.games_owned, 3);
        assert_eq!(view.games_lent, 0);
        // Borrowed count has no backing collection and passes through
        assert_eq!(view.games_borrowed, 2);
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let view = ProfileView::from_parts(sample_profile(), 1, 4);
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["gamesOwned"], 1);
        assert_eq!(json["gamesLent"], 4);
        assert_eq!(json["aboutMe"], "Analytical engines and roguelikes.");
        assert!(json.get("games_owned").is_none());
    }
}
