//! Product catalog routes

use axum::Router;
use domain_catalog::handlers;

use crate::state::AppState;

/// Create the products router backed by the app's shared service.
///
/// The service is cloned per router, not per request; clones share the
/// same underlying store.
pub fn router(state: &AppState) -> Router {
    handlers::router(state.service.clone())
}
