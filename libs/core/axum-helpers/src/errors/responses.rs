//! Reusable OpenAPI response types for consistent API documentation.

use serde::Serialize;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::{ToResponse, ToSchema};

/// Concrete error envelope shape for OpenAPI documentation.
///
/// The runtime type is `ApiResponse<T>` with `data` omitted; this mirror
/// exists so the documented components have a closed schema.
#[derive(Serialize, ToSchema)]
pub struct ErrorEnvelope {
    /// Always `false` for error responses
    pub success: bool,
    /// Human-readable error message
    pub message: String,
}

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "An internal server error occurred"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorEnvelope);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "Product name is required"
    })
)]
pub struct BadRequestValidationResponse(pub ErrorEnvelope);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid id",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "Invalid product id: abc"
    })
)]
pub struct BadRequestIdResponse(pub ErrorEnvelope);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "success": false,
        "message": "Product not found with id: 42"
    })
)]
pub struct NotFoundResponse(pub ErrorEnvelope);
