use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// Referenced id does not exist in the store.
    #[error("Product not found with id: {0}")]
    NotFound(i64),

    /// Caller-supplied data violates a field constraint; the message names
    /// the first violated field.
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },
}

impl CatalogError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Convert CatalogError to AppError for standardized envelope responses
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => {
                AppError::NotFound(format!("Product not found with id: {}", id))
            }
            CatalogError::Validation { message, .. } => AppError::BadRequest(message),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        // Convert to AppError for the standardized error response format
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_message_carries_the_id() {
        let err = CatalogError::NotFound(99999);
        assert!(err.to_string().contains("99999"));
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let response = CatalogError::NotFound(1).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let response =
            CatalogError::validation("name", "Product name is required").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_validation_display_is_the_message() {
        let err = CatalogError::validation("price", "Product price must be a non-negative number");
        assert_eq!(
            err.to_string(),
            "Product price must be a non-negative number"
        );
    }
}
