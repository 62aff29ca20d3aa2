use axum::http::Method;
use axum::http::header;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS layer for APIs without a browser credential story.
///
/// Allows any origin with the conventional method set and JSON headers.
/// Credentials are not allowed (incompatible with a wildcard origin).
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}
