//! Uniform response envelope.
//!
//! Every API body — success or failure — is wrapped in [`ApiResponse`] so
//! clients can branch on a single `success` flag instead of inspecting
//! status codes and ad-hoc shapes.

use serde::{Deserialize, Serialize};

/// Response envelope carrying a success flag, an optional human-readable
/// message, and an optional payload.
///
/// `message` and `data` are omitted from the JSON when absent.
///
/// # JSON Examples
///
/// ```json
/// { "success": true, "message": "Product created successfully", "data": { "id": 1 } }
/// ```
///
/// ```json
/// { "success": false, "message": "Product not found with id: 42" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was handled successfully
    pub success: bool,
    /// Optional human-readable message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Optional payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying only a payload.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Successful response with a message and a payload.
    pub fn success_with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }

    /// Failed response with a message and no payload.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}

impl ApiResponse<()> {
    /// Successful response with a message and no payload.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_omits_message() {
        let json = serde_json::to_value(ApiResponse::success(7)).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "data": 7 }));
    }

    #[test]
    fn test_success_with_message() {
        let json =
            serde_json::to_value(ApiResponse::success_with_message("created", vec![1, 2])).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": true, "message": "created", "data": [1, 2] })
        );
    }

    #[test]
    fn test_error_omits_data() {
        let json = serde_json::to_value(ApiResponse::<()>::error("nope")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "message": "nope" })
        );
    }

    #[test]
    fn test_message_only() {
        let json = serde_json::to_value(ApiResponse::message("deleted")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": true, "message": "deleted" })
        );
    }

    #[test]
    fn test_roundtrip() {
        let body = r#"{ "success": true, "data": { "id": 3 } }"#;
        let parsed: ApiResponse<serde_json::Value> = serde_json::from_str(body).unwrap();
        assert!(parsed.success);
        assert!(parsed.message.is_none());
        assert_eq!(parsed.data.unwrap()["id"], 3);
    }
}
