//! Application state management

use domain_catalog::{CatalogService, InMemoryProductRepository};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub service: CatalogService<InMemoryProductRepository>,
}
