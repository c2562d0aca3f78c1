use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

/// A user's owned or wishlist document as the store holds it
///
/// The store keeps these as a string-keyed presence map under a `games`
/// field, and the field itself may be missing on freshly created accounts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CollectionDoc {
    #[serde(default)]
    pub games: Option<HashMap<String, bool>>,
}

/// The set of game identifiers in one collection
///
/// Converted from the store's native map shape at the boundary; ordering is
/// lexicographic so repeated reads of the same document serialize the same
/// way.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameSet(BTreeSet<String>);

impl GameSet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, game_id: &str) -> bool {
        self.0.contains(game_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0.into_iter().collect()
    }
}

impl From<CollectionDoc> for GameSet {
    fn from(doc: CollectionDoc) -> Self {
        // Presence in the map is what counts; the boolean payload is ignored
        // just as the original list views ignore it.
        GameSet(doc.games.unwrap_or_default().into_keys().collect())
    }
}

impl FromIterator<String> for GameSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        GameSet(iter.into_iter().collect())
    }
}
