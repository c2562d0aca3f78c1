use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A game as returned by the external catalog service
///
/// Records are immutable snapshots of the catalog's data; nothing in this
/// service mutates or persists them. Nested associations keep the catalog's
/// wrapper shape so ordering survives a round trip to the client unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameRecord {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub background_image: Option<String>,
    #[serde(default)]
    pub platforms: Vec<PlatformAssociation>,
    #[serde(default)]
    pub stores: Vec<StoreAssociation>,
    #[serde(default)]
    pub released: Option<NaiveDate>,
    #[serde(default)]
    pub playtime: u32,
    #[serde(default)]
    pub genres: Vec<GenreRecord>,
    #[serde(default)]
    pub description_raw: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub developers: Option<Vec<DeveloperRecord>>,
}

/// Wrapper the catalog uses for a game's platform list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformAssociation {
    pub platform: NamedRef,
}

/// Wrapper the catalog uses for a game's store list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreAssociation {
    pub store: NamedRef,
}

/// An id/name pair nested inside catalog association wrappers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NamedRef {
    pub id: u64,
    pub name: String,
}

/// A genre taxonomy entry
///
/// The catalog omits `name` on some genre payloads, so it stays optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GenreRecord {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    pub slug: String,
}

/// A platform taxonomy entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatformRecord {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeveloperRecord {
    pub id: u64,
    pub name: String,
}

/// One screenshot attached to a game
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Screenshot {
    pub id: u64,
    pub image: String,
}

/// Response envelope for the catalog's list endpoints
///
/// `next`/`previous` are opaque cursor URLs whose semantics belong to the
/// external service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GamePage {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<GameRecord>,
}
