mod collection;
mod game;
mod profile;

pub use collection::{CollectionDoc, GameSet};
pub use game::{
    DeveloperRecord, GamePage, GameRecord, GenreRecord, NamedRef, PlatformAssociation,
    PlatformRecord, Screenshot, StoreAssociation,
};
pub use profile::{ProfileLookup, ProfileView, UserProfile};
