//! API routes module

pub mod catalog;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/v1/products", catalog::router(state))
}
