//! HTTP handlers for the catalog API

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    ApiResponse, IdPath,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogResult;
use crate::models::{CatalogStats, Product, ProductQuery, ProductRequest, QuantityUpdate};
use crate::repository::ProductRepository;
use crate::service::CatalogService;

/// OpenAPI documentation for the catalog API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        create_product,
        get_product,
        update_product,
        update_quantity,
        toggle_status,
        delete_product,
        search_products,
        get_stats,
    ),
    components(
        schemas(Product, ProductRequest, QuantityUpdate, CatalogStats),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the catalog router with all HTTP endpoints
pub fn router<R: ProductRepository + 'static>(service: CatalogService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/search", get(search_products))
        .route("/stats", get(get_stats))
        .route(
            "/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/{id}/quantity", patch(update_quantity))
        .route("/{id}/toggle-status", patch(toggle_status))
        .with_state(shared_service)
}

/// List products, optionally filtered by category or active flag.
///
/// `category` takes precedence over `activeOnly`; with neither supplied
/// every product is returned.
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    params(ProductQuery),
    responses(
        (status = 200, description = "List of products", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_products<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Query(query): Query<ProductQuery>,
) -> CatalogResult<Json<ApiResponse<Vec<Product>>>> {
    let products = match query.category.as_deref() {
        Some(category) if !category.trim().is_empty() => {
            service.products_by_category(category).await?
        }
        _ if query.active_only == Some(true) => service.active_products().await?,
        _ => service.list_products().await?,
    };

    Ok(Json(ApiResponse::success(products)))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = ProductRequest,
    responses(
        (status = 201, description = "Product created successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_product<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Json(request): Json<ProductRequest>,
) -> CatalogResult<impl IntoResponse> {
    let product = service.create_product(request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            "Product created successfully",
            product,
        )),
    ))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    IdPath(id): IdPath,
) -> CatalogResult<Json<ApiResponse<Product>>> {
    let product = service.get_product(id).await?;
    Ok(Json(ApiResponse::success(product)))
}

/// Fully update a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    request_body = ProductRequest,
    responses(
        (status = 200, description = "Product updated successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_product<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    IdPath(id): IdPath,
    Json(request): Json<ProductRequest>,
) -> CatalogResult<Json<ApiResponse<Product>>> {
    let product = service.update_product(id, request).await?;
    Ok(Json(ApiResponse::success_with_message(
        "Product updated successfully",
        product,
    )))
}

/// Update only the quantity of a product
#[utoipa::path(
    patch,
    path = "/{id}/quantity",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    request_body = QuantityUpdate,
    responses(
        (status = 200, description = "Quantity updated successfully", body = Product),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_quantity<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    IdPath(id): IdPath,
    Json(body): Json<QuantityUpdate>,
) -> CatalogResult<Json<ApiResponse<Product>>> {
    let product = service.update_quantity(id, body.quantity).await?;
    Ok(Json(ApiResponse::success_with_message(
        "Quantity updated successfully",
        product,
    )))
}

/// Toggle the active status of a product
#[utoipa::path(
    patch,
    path = "/{id}/toggle-status",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product status toggled", body = Product),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn toggle_status<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    IdPath(id): IdPath,
) -> CatalogResult<Json<ApiResponse<Product>>> {
    let product = service.toggle_status(id).await?;
    let message = if product.active {
        "Product activated"
    } else {
        "Product deactivated"
    };
    Ok(Json(ApiResponse::success_with_message(message, product)))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = i64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product deleted successfully"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    IdPath(id): IdPath,
) -> CatalogResult<Json<ApiResponse<()>>> {
    service.delete_product(id).await?;
    Ok(Json(ApiResponse::message("Product deleted successfully")))
}

/// Search query parameters
#[derive(Debug, serde::Deserialize, utoipa::IntoParams)]
pub struct SearchQuery {
    /// Search query string; blank returns every product
    pub q: String,
}

/// Search products by a free-text query over name and description
#[utoipa::path(
    get,
    path = "/search",
    tag = "Products",
    params(SearchQuery),
    responses(
        (status = 200, description = "Search results", body = Vec<Product>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn search_products<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
    Query(query): Query<SearchQuery>,
) -> CatalogResult<Json<ApiResponse<Vec<Product>>>> {
    let products = service.search_products(&query.q).await?;
    Ok(Json(ApiResponse::success(products)))
}

/// Catalog statistics: total and active product counts
#[utoipa::path(
    get,
    path = "/stats",
    tag = "Products",
    responses(
        (status = 200, description = "Catalog statistics", body = CatalogStats),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_stats<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
) -> CatalogResult<Json<ApiResponse<CatalogStats>>> {
    let stats = CatalogStats {
        total_products: service.count_products().await?,
        active_products: service.count_active_products().await?,
    };
    Ok(Json(ApiResponse::success(stats)))
}
