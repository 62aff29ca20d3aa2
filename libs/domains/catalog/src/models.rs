use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Product entity - a single record in the in-memory catalog
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier issued by the store; never reused
    pub id: i64,
    /// Product name
    pub name: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Unit price, non-negative
    pub price: f64,
    /// Stock quantity, non-negative
    pub quantity: i32,
    /// Optional category; compared case-insensitively
    pub category: Option<String>,
    /// Whether the product is visible in active listings
    pub active: bool,
    /// Creation timestamp, set once
    pub created_at: DateTime<Utc>,
    /// Last update timestamp, refreshed on every mutation
    pub updated_at: DateTime<Utc>,
}

/// Validated field set accepted by the store for create and update.
///
/// Produced by the service's validation gate; by the time a `ProductInput`
/// exists, name/price/quantity have passed their constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
    pub category: Option<String>,
}

/// DTO for creating or fully updating a product.
///
/// Every field is optional at the decoding layer so absent JSON fields reach
/// the validation gate and fail with the canonical per-field messages
/// instead of a serde error.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub category: Option<String>,
}

/// Payload for the quantity-only update
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuantityUpdate {
    /// New stock quantity, non-negative
    pub quantity: Option<i32>,
}

/// Query filters for listing products.
///
/// `category` takes precedence over `activeOnly` when both are supplied;
/// neither supplied means "all products".
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    /// Filter by category (case-insensitive)
    pub category: Option<String>,
    /// Only return active products
    pub active_only: Option<bool>,
}

/// Catalog statistics payload
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    /// Total number of stored products
    pub total_products: u64,
    /// Number of stored products with `active == true`
    pub active_products: u64,
}

impl Product {
    /// Build a new record from a validated input; the store assigns the id.
    pub fn new(id: i64, input: ProductInput) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: input.name,
            description: input.description,
            price: input.price,
            quantity: input.quantity,
            category: input.category,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the caller-supplied fields from a validated input.
    ///
    /// `id`, `active` and `created_at` are untouched.
    pub fn apply_input(&mut self, input: ProductInput) {
        self.name = input.name;
        self.description = input.description;
        self.price = input.price;
        self.quantity = input.quantity;
        self.category = input.category;
        self.updated_at = Utc::now();
    }

    /// Set the stock quantity and refresh `updated_at`.
    pub fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
        self.updated_at = Utc::now();
    }

    /// Flip the active flag and refresh `updated_at`.
    pub fn toggle_active(&mut self) {
        self.active = !self.active;
        self.updated_at = Utc::now();
    }

    /// Case-insensitive category equality; products without a category
    /// never match.
    pub fn matches_category(&self, category: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(category))
    }

    /// Case-insensitive substring match against name or description; an
    /// absent description never matches. Expects an already-lowercased
    /// query.
    pub fn matches_query(&self, query_lower: &str) -> bool {
        self.name.to_lowercase().contains(query_lower)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(query_lower))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> ProductInput {
        ProductInput {
            name: "Laptop".to_string(),
            description: Some("Gaming laptop".to_string()),
            price: 1499.99,
            quantity: 10,
            category: Some("Electronics".to_string()),
        }
    }

    #[test]
    fn test_new_product_is_active_with_equal_timestamps() {
        let product = Product::new(1, input());

        assert!(product.active);
        assert_eq!(product.created_at, product.updated_at);
        assert_eq!(product.id, 1);
    }

    #[test]
    fn test_apply_input_preserves_identity_fields() {
        let mut product = Product::new(3, input());
        let created_at = product.created_at;
        product.active = false;

        product.apply_input(ProductInput {
            name: "Desktop".to_string(),
            description: None,
            price: 899.0,
            quantity: 2,
            category: None,
        });

        assert_eq!(product.id, 3);
        assert_eq!(product.created_at, created_at);
        assert!(!product.active, "active flag must survive a full update");
        assert_eq!(product.name, "Desktop");
        assert!(product.updated_at >= created_at);
    }

    #[test]
    fn test_matches_category_is_case_insensitive() {
        let product = Product::new(1, input());

        assert!(product.matches_category("electronics"));
        assert!(product.matches_category("ELECTRONICS"));
        assert!(!product.matches_category("Books"));
    }

    #[test]
    fn test_matches_category_without_category() {
        let mut no_category = input();
        no_category.category = None;
        let product = Product::new(1, no_category);

        assert!(!product.matches_category("Electronics"));
    }

    #[test]
    fn test_matches_query_checks_name_and_description() {
        let product = Product::new(1, input());

        assert!(product.matches_query("laptop"));
        assert!(product.matches_query("gaming"));
        assert!(!product.matches_query("phone"));
    }

    #[test]
    fn test_matches_query_without_description() {
        let mut no_description = input();
        no_description.description = None;
        let product = Product::new(1, no_description);

        assert!(product.matches_query("laptop"));
        assert!(!product.matches_query("gaming"));
    }

    #[test]
    fn test_product_json_uses_camel_case_timestamps() {
        let product = Product::new(1, input());
        let json = serde_json::to_value(&product).unwrap();

        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert_eq!(json["price"], 1499.99);
    }

    #[test]
    fn test_product_request_tolerates_missing_fields() {
        let request: ProductRequest = serde_json::from_str(r#"{ "name": "Only name" }"#).unwrap();

        assert_eq!(request.name.as_deref(), Some("Only name"));
        assert!(request.price.is_none());
        assert!(request.quantity.is_none());
    }
}
