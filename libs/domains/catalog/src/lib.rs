//! Catalog Domain
//!
//! This module provides a complete domain implementation for an in-memory
//! product catalog.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, response envelope
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation gate
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Storage (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! The store is concurrency-safe: the in-memory repository guards its map
//! with an async lock and issues ids from an atomic counter, so each
//! operation appears atomic to concurrent callers and two concurrent
//! creates never share an id.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{
//!     handlers,
//!     repository::InMemoryProductRepository,
//!     service::CatalogService,
//! };
//!
//! // Create a repository and service
//! let repository = InMemoryProductRepository::new();
//! let service = CatalogService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{CatalogError, CatalogResult};
pub use handlers::ApiDoc;
pub use models::{
    CatalogStats, Product, ProductInput, ProductQuery, ProductRequest, QuantityUpdate,
};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::CatalogService;
