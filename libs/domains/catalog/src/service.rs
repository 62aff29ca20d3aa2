//! Catalog service - business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Product, ProductInput, ProductRequest};
use crate::repository::ProductRepository;

/// Catalog service providing the store's business operations.
///
/// The service owns the validation gate and the precedence rules between
/// lookups and validation; the repository below it only stores.
pub struct CatalogService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> CatalogService<R> {
    /// Create a new CatalogService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Validation gate shared by create and update.
    ///
    /// Fields are checked in order: name, then price, then quantity; the
    /// first violation wins. On success the request collapses into a
    /// concrete [`ProductInput`].
    fn validate(request: &ProductRequest) -> CatalogResult<ProductInput> {
        let name = match &request.name {
            Some(name) if !name.trim().is_empty() => name.clone(),
            _ => return Err(CatalogError::validation("name", "Product name is required")),
        };

        let price = match request.price {
            Some(price) if price >= 0.0 => price,
            _ => {
                return Err(CatalogError::validation(
                    "price",
                    "Product price must be a non-negative number",
                ))
            }
        };

        let quantity = match request.quantity {
            Some(quantity) if quantity >= 0 => quantity,
            _ => {
                return Err(CatalogError::validation(
                    "quantity",
                    "Product quantity must be a non-negative number",
                ))
            }
        };

        Ok(ProductInput {
            name,
            description: request.description.clone(),
            price,
            quantity,
            category: request.category.clone(),
        })
    }

    /// Create a new product.
    ///
    /// Validation runs before the store allocates an id, so a rejected
    /// request never consumes one.
    #[instrument(skip(self, request))]
    pub async fn create_product(&self, request: ProductRequest) -> CatalogResult<Product> {
        let input = Self::validate(&request)?;
        self.repository.create(input).await
    }

    /// Get a product by id
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i64) -> CatalogResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound(id))
    }

    /// Every stored product; callers must not depend on ordering
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> CatalogResult<Vec<Product>> {
        self.repository.list().await
    }

    /// Products in the given category (case-insensitive)
    #[instrument(skip(self))]
    pub async fn products_by_category(&self, category: &str) -> CatalogResult<Vec<Product>> {
        self.repository.list_by_category(category).await
    }

    /// Products with `active == true`
    #[instrument(skip(self))]
    pub async fn active_products(&self) -> CatalogResult<Vec<Product>> {
        self.repository.list_active().await
    }

    /// Free-text search over name and description.
    ///
    /// A blank query falls back to the full listing.
    #[instrument(skip(self))]
    pub async fn search_products(&self, query: &str) -> CatalogResult<Vec<Product>> {
        if query.trim().is_empty() {
            return self.list_products().await;
        }
        self.repository.search(query).await
    }

    /// Fully update an existing product.
    ///
    /// The existence lookup happens before validation, so `NotFound` takes
    /// precedence over `Validation` when both would apply.
    #[instrument(skip(self, request))]
    pub async fn update_product(
        &self,
        id: i64,
        request: ProductRequest,
    ) -> CatalogResult<Product> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound(id))?;

        let input = Self::validate(&request)?;
        self.repository.update(id, input).await
    }

    /// Set the quantity of an existing product.
    ///
    /// The quantity is validated before the existence lookup; an absent or
    /// negative quantity fails even for a missing id. This ordering is the
    /// opposite of [`Self::update_product`] and is part of the contract.
    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        id: i64,
        quantity: Option<i32>,
    ) -> CatalogResult<Product> {
        let quantity = match quantity {
            Some(quantity) if quantity >= 0 => quantity,
            _ => {
                return Err(CatalogError::validation(
                    "quantity",
                    "Quantity must be a non-negative number",
                ))
            }
        };

        self.repository.set_quantity(id, quantity).await
    }

    /// Flip the active flag of an existing product
    #[instrument(skip(self))]
    pub async fn toggle_status(&self, id: i64) -> CatalogResult<Product> {
        self.repository.toggle_active(id).await
    }

    /// Permanently delete a product; its id is never reissued
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: i64) -> CatalogResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(CatalogError::NotFound(id))
        }
    }

    /// Total number of stored products
    #[instrument(skip(self))]
    pub async fn count_products(&self) -> CatalogResult<u64> {
        self.repository.count().await
    }

    /// Number of stored products with `active == true`
    #[instrument(skip(self))]
    pub async fn count_active_products(&self) -> CatalogResult<u64> {
        self.repository.count_active().await
    }
}

impl<R: ProductRepository> Clone for CatalogService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
