pub mod postgres;
pub mod store;

pub use postgres::create_pool;
#[cfg(test)]
pub use store::MockDocumentStore;
pub use store::{DocumentStore, PostgresStore};
