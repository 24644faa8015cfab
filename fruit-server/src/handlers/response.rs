//! Response envelope `{ data?, success, description }` and the failure type handlers return.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use fruit_core::ValidationError;
use fruit_storage::StorageError;
use serde::Serialize;
use tracing::error;

pub mod messages {
    pub const LIST_OK: &str = "Fruits retrieved successfully";
    pub const GET_OK: &str = "Fruit retrieved successfully";
    pub const CREATE_OK: &str = "Fruit added successfully";
    pub const INVALID_ID: &str = "The fruit id is not valid";
    pub const ROUTE_NOT_FOUND: &str = "Sorry, the page you are looking for does not exist";
    pub const INVALID_JSON: &str = "Request body is not valid JSON";
    pub const NOT_AN_OBJECT: &str = "Request body must be a JSON object";
    pub const INTERNAL: &str = "Internal server error";

    pub fn not_found(id: i64) -> String {
        format!("Fruit {} does not exist", id)
    }

    pub fn delete_not_found(id: i64) -> String {
        format!("Fruit {} to delete does not exist", id)
    }

    pub fn updated(id: i64) -> String {
        format!("Fruit {} updated successfully", id)
    }

    pub fn deleted(id: i64) -> String {
        format!("Fruit {} deleted successfully", id)
    }
}

/// Successful response body; `status` is sent as the HTTP status, not in the JSON.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    #[serde(skip)]
    status: StatusCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub success: bool,
    pub description: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn with_data(status: StatusCode, data: T, description: impl Into<String>) -> Self {
        Self {
            status,
            data: Some(data),
            success: true,
            description: description.into(),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(status: StatusCode, description: impl Into<String>) -> Self {
        Self {
            status,
            data: None,
            success: true,
            description: description.into(),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}

/// A rejected request: status plus human-readable description, sent with `success: false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiFailure {
    pub status: StatusCode,
    pub description: String,
}

pub type ApiResult = Result<Response, ApiFailure>;

impl ApiFailure {
    pub fn new(status: StatusCode, description: impl Into<String>) -> Self {
        Self {
            status,
            description: description.into(),
        }
    }

    pub fn invalid_id() -> Self {
        Self::new(StatusCode::BAD_REQUEST, messages::INVALID_ID)
    }

    /// Unknown id. Reported as 400, not 404.
    pub fn not_found(id: i64) -> Self {
        Self::new(StatusCode::BAD_REQUEST, messages::not_found(id))
    }

    pub fn delete_not_found(id: i64) -> Self {
        Self::new(StatusCode::BAD_REQUEST, messages::delete_not_found(id))
    }

    pub fn bad_body(description: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, description)
    }

    pub fn route_not_found() -> Self {
        Self::new(StatusCode::NOT_FOUND, messages::ROUTE_NOT_FOUND)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, messages::INTERNAL)
    }
}

impl From<ValidationError> for ApiFailure {
    fn from(e: ValidationError) -> Self {
        Self::new(StatusCode::BAD_REQUEST, e.to_string())
    }
}

impl From<StorageError> for ApiFailure {
    fn from(e: StorageError) -> Self {
        error!(error = %e, "Persistence failure");
        Self::internal()
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let body = ApiResponse::<()> {
            status: self.status,
            data: None,
            success: false,
            description: self.description,
        };
        body.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fruit_core::FruitField;

    #[test]
    fn test_envelope_omits_absent_data() {
        let body = ApiResponse::message(StatusCode::CREATED, messages::CREATE_OK);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "success": true, "description": "Fruit added successfully" })
        );
    }

    #[test]
    fn test_validation_error_maps_to_bad_request() {
        let failure = ApiFailure::from(ValidationError::MissingField(FruitField::Stock));
        assert_eq!(failure.status, StatusCode::BAD_REQUEST);
        assert_eq!(failure.description, "Fruit stock was not provided");
    }

    #[test]
    fn test_not_found_is_bad_request_with_id() {
        let failure = ApiFailure::not_found(42);
        assert_eq!(failure.status, StatusCode::BAD_REQUEST);
        assert!(failure.description.contains("42"));
    }
}
