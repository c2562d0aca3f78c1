use std::sync::Arc;

use crate::{db::DocumentStore, services::CatalogClient};

/// Shared application state
///
/// Both handles are explicitly constructed at startup and injected here;
/// nothing in the crate reaches for a process-wide client.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogClient,
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn new(catalog: CatalogClient, store: Arc<dyn DocumentStore>) -> Self {
        Self { catalog, store }
    }
}
