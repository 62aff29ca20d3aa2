use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Product, ProductInput};

/// Repository trait for Product storage
///
/// This trait defines the data access interface for products.
/// Implementations can use different storage backends; callers never hold a
/// mutable reference into the store's internal state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product, assigning the next unique id
    async fn create(&self, input: ProductInput) -> CatalogResult<Product>;

    /// Get a product by id
    async fn get_by_id(&self, id: i64) -> CatalogResult<Option<Product>>;

    /// Every stored product; ordering is unspecified
    async fn list(&self) -> CatalogResult<Vec<Product>>;

    /// Products whose category equals the argument, case-insensitively
    async fn list_by_category(&self, category: &str) -> CatalogResult<Vec<Product>>;

    /// Products with `active == true`
    async fn list_active(&self) -> CatalogResult<Vec<Product>>;

    /// Products whose name or description contains the query,
    /// case-insensitively
    async fn search(&self, query: &str) -> CatalogResult<Vec<Product>>;

    /// Overwrite the caller-supplied fields of an existing product
    async fn update(&self, id: i64, input: ProductInput) -> CatalogResult<Product>;

    /// Set the stock quantity of an existing product
    async fn set_quantity(&self, id: i64, quantity: i32) -> CatalogResult<Product>;

    /// Flip the active flag of an existing product
    async fn toggle_active(&self, id: i64) -> CatalogResult<Product>;

    /// Remove a product; returns whether it existed
    async fn delete(&self, id: i64) -> CatalogResult<bool>;

    /// Total number of stored products
    async fn count(&self) -> CatalogResult<u64>;

    /// Number of stored products with `active == true`
    async fn count_active(&self) -> CatalogResult<u64>;
}

/// In-memory implementation of ProductRepository.
///
/// A shared map guarded by an async `RwLock` paired with an atomic id
/// counter starting at 1. The id is issued under the write guard so id
/// issuance and insertion appear atomic to concurrent callers; ids of
/// deleted products are never handed out again.
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<i64, Product>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, input: ProductInput) -> CatalogResult<Product> {
        let mut products = self.products.write().await;

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let product = Product::new(id, input);
        products.insert(id, product.clone());

        tracing::info!(product_id = id, "Created product");
        Ok(product)
    }

    async fn get_by_id(&self, id: i64) -> CatalogResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn list(&self) -> CatalogResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.values().cloned().collect())
    }

    async fn list_by_category(&self, category: &str) -> CatalogResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products
            .values()
            .filter(|p| p.matches_category(category))
            .cloned()
            .collect())
    }

    async fn list_active(&self) -> CatalogResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products.values().filter(|p| p.active).cloned().collect())
    }

    async fn search(&self, query: &str) -> CatalogResult<Vec<Product>> {
        let query_lower = query.to_lowercase();
        let products = self.products.read().await;
        Ok(products
            .values()
            .filter(|p| p.matches_query(&query_lower))
            .cloned()
            .collect())
    }

    async fn update(&self, id: i64, input: ProductInput) -> CatalogResult<Product> {
        let mut products = self.products.write().await;

        let product = products.get_mut(&id).ok_or(CatalogError::NotFound(id))?;
        product.apply_input(input);
        let updated = product.clone();

        tracing::info!(product_id = id, "Updated product");
        Ok(updated)
    }

    async fn set_quantity(&self, id: i64, quantity: i32) -> CatalogResult<Product> {
        let mut products = self.products.write().await;

        let product = products.get_mut(&id).ok_or(CatalogError::NotFound(id))?;
        product.set_quantity(quantity);
        let updated = product.clone();

        tracing::info!(product_id = id, quantity, "Updated product quantity");
        Ok(updated)
    }

    async fn toggle_active(&self, id: i64) -> CatalogResult<Product> {
        let mut products = self.products.write().await;

        let product = products.get_mut(&id).ok_or(CatalogError::NotFound(id))?;
        product.toggle_active();
        let updated = product.clone();

        tracing::info!(product_id = id, active = updated.active, "Toggled product status");
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> CatalogResult<bool> {
        let mut products = self.products.write().await;

        if products.remove(&id).is_some() {
            tracing::info!(product_id = id, "Deleted product");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn count(&self) -> CatalogResult<u64> {
        let products = self.products.read().await;
        Ok(products.len() as u64)
    }

    async fn count_active(&self) -> CatalogResult<u64> {
        let products = self.products.read().await;
        Ok(products.values().filter(|p| p.active).count() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, category: Option<&str>) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            description: None,
            price: 9.99,
            quantity: 1,
            category: category.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids_from_one() {
        let repo = InMemoryProductRepository::new();

        let first = repo.create(input("a", None)).await.unwrap();
        let second = repo.create(input("b", None)).await.unwrap();
        let third = repo.create(input("c", None)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn test_create_and_get_by_id() {
        let repo = InMemoryProductRepository::new();

        let created = repo.create(input("Laptop", None)).await.unwrap();
        let fetched = repo.get_by_id(created.id).await.unwrap();

        assert_eq!(fetched.unwrap().name, "Laptop");
        assert!(repo.get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_concurrent_creates_issue_distinct_ids() {
        let repo = InMemoryProductRepository::new();

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(input(&format!("p{}", i), None)).await })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().unwrap().id);
        }

        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16, "every concurrent create must get its own id");
    }

    #[tokio::test]
    async fn test_deleted_ids_are_never_reused() {
        let repo = InMemoryProductRepository::new();

        let doomed = repo.create(input("doomed", None)).await.unwrap();
        assert!(repo.delete(doomed.id).await.unwrap());
        assert!(!repo.delete(doomed.id).await.unwrap());

        let next = repo.create(input("next", None)).await.unwrap();
        assert!(next.id > doomed.id);
        assert!(repo.get_by_id(doomed.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_by_category_is_case_insensitive() {
        let repo = InMemoryProductRepository::new();
        repo.create(input("tv", Some("Electronics"))).await.unwrap();
        repo.create(input("novel", Some("Books"))).await.unwrap();
        repo.create(input("radio", Some("electronics"))).await.unwrap();
        repo.create(input("bare", None)).await.unwrap();

        let electronics = repo.list_by_category("ELECTRONICS").await.unwrap();
        assert_eq!(electronics.len(), 2);

        assert!(repo.list_by_category("garden").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_search_matches_name_and_description() {
        let repo = InMemoryProductRepository::new();
        repo.create(ProductInput {
            description: Some("A mechanical keyboard".to_string()),
            ..input("Typist Pro", None)
        })
        .await
        .unwrap();
        repo.create(input("Mouse", None)).await.unwrap();

        assert_eq!(repo.search("KEYBOARD").await.unwrap().len(), 1);
        assert_eq!(repo.search("typist").await.unwrap().len(), 1);
        assert!(repo.search("monitor").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_set_quantity_refreshes_updated_at() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(input("Laptop", None)).await.unwrap();

        let updated = repo.set_quantity(created.id, 42).await.unwrap();

        assert_eq!(updated.quantity, 42);
        assert!(updated.updated_at >= created.updated_at);
        assert!(matches!(
            repo.set_quantity(999, 1).await,
            Err(CatalogError::NotFound(999))
        ));
    }

    #[tokio::test]
    async fn test_toggle_active_twice_restores_original() {
        let repo = InMemoryProductRepository::new();
        let created = repo.create(input("Lamp", None)).await.unwrap();
        assert!(created.active);

        let toggled = repo.toggle_active(created.id).await.unwrap();
        assert!(!toggled.active);

        let restored = repo.toggle_active(created.id).await.unwrap();
        assert!(restored.active);
    }

    #[tokio::test]
    async fn test_counts_track_active_flag() {
        let repo = InMemoryProductRepository::new();
        let a = repo.create(input("a", None)).await.unwrap();
        repo.create(input("b", None)).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 2);
        assert_eq!(repo.count_active().await.unwrap(), 2);

        repo.toggle_active(a.id).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 2);
        assert_eq!(repo.count_active().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let repo = InMemoryProductRepository::new();

        let result = repo.update(7, input("ghost", None)).await;

        assert!(matches!(result, Err(CatalogError::NotFound(7))));
    }
}
