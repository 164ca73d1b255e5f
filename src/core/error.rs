//! Typed error handling for the API
//!
//! Every stage of a request pipeline returns an [`ApiResult`]. The first error
//! aborts the request and is rendered by [`ApiError`]'s `IntoResponse` impl, so
//! handlers never emit error responses by hand.
//!
//! # Error Categories
//!
//! - [`EntityError`]: a record could not be resolved (404)
//! - [`ValidationError`]: malformed input, id mismatches, illegal order states (400)
//! - [`RequestError`]: routing and body-level failures (400/404/405)
//! - [`StorageError`]: backend failures (500)
//! - [`ConfigError`]: configuration loading and seeding, raised at startup only
//!
//! # Example
//!
//! ```rust,ignore
//! match pipeline_result {
//!     Err(ApiError::Entity(EntityError::NotFound { id, .. })) => {
//!         println!("record {} is gone", id);
//!     }
//!     Err(e) => eprintln!("{} ({})", e, e.status_code()),
//!     Ok(order) => println!("{:?}", order),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// The main error type of the API
#[derive(Debug, Error)]
pub enum ApiError {
    /// Record lookup errors
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// Input and state-transition errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// HTTP/Request errors
    #[error(transparent)]
    Request(#[from] RequestError),

    /// Storage backend errors
    #[error(transparent)]
    Storage(#[from] StorageError),

}

/// Error body sent to clients
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Error code for programmatic handling
    pub code: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Entity(e) => e.status_code(),
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Request(e) => e.status_code(),
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Entity(e) => e.error_code(),
            ApiError::Validation(e) => e.error_code(),
            ApiError::Request(e) => e.error_code(),
            ApiError::Storage(e) => e.error_code(),
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: self.to_string(),
            code: self.error_code().to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ApiError::Entity(EntityError::NotFound { entity_type, id }) => {
                Some(serde_json::json!({
                    "entity_type": entity_type,
                    "id": id,
                }))
            }
            ApiError::Validation(ValidationError::FieldError { field, .. }) => {
                Some(serde_json::json!({ "field": field }))
            }
            ApiError::Validation(ValidationError::IdMismatch { route_id, body_id }) => {
                Some(serde_json::json!({
                    "route_id": route_id,
                    "body_id": body_id,
                }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), "{}", self);
        } else {
            tracing::debug!(code = self.error_code(), status = status.as_u16(), "{}", self);
        }
        (status, Json(self.to_response())).into_response()
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to resolving records
#[derive(Debug, Error)]
pub enum EntityError {
    /// No record carries the requested identifier
    #[error("{entity_type} with id {id} not found")]
    NotFound { entity_type: String, id: String },
}

impl EntityError {
    pub fn not_found(entity_type: &str, id: impl Into<String>) -> Self {
        EntityError::NotFound {
            entity_type: entity_type.to_string(),
            id: id.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation and order lifecycle rules
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A field (or group of fields) failed a rule
    #[error("{message}")]
    FieldError { field: String, message: String },

    /// The identifier in the body differs from the one in the route
    #[error("Route {route_id} does not match given id {body_id}")]
    IdMismatch { route_id: String, body_id: String },

    /// Status is missing or not one of the lifecycle values
    #[error("Order must have a status of pending, preparing, out-for-delivery, delivered")]
    InvalidStatus { value: String },

    /// Delivered orders are terminal
    #[error("A delivered order cannot be changed")]
    DeliveredOrder,

    /// Status may only move forward through the lifecycle
    #[error("Order status cannot move from {from} back to {to}")]
    StatusRegression { from: String, to: String },

    /// Only pending orders may be deleted
    #[error("An order cannot be deleted unless it is pending")]
    DeleteNotPending { status: String },

    /// The request body is not valid JSON
    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },
}

impl ValidationError {
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        ValidationError::FieldError {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::FieldError { .. } => "VALIDATION_ERROR",
            ValidationError::IdMismatch { .. } => "ID_MISMATCH",
            ValidationError::InvalidStatus { .. } => "INVALID_STATUS",
            ValidationError::DeliveredOrder => "ORDER_DELIVERED",
            ValidationError::StatusRegression { .. } => "STATUS_REGRESSION",
            ValidationError::DeleteNotPending { .. } => "ORDER_NOT_PENDING",
            ValidationError::InvalidJson { .. } => "INVALID_JSON",
        }
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to HTTP requests
#[derive(Debug, Error)]
pub enum RequestError {
    /// No route matches the path
    #[error("Path not found: {path}")]
    PathNotFound { path: String },

    /// The route exists but not for this verb
    #[error("{method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },

    /// Invalid request body
    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },
}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::PathNotFound { .. } => StatusCode::NOT_FOUND,
            RequestError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            RequestError::InvalidBody { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::PathNotFound { .. } => "PATH_NOT_FOUND",
            RequestError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
            RequestError::InvalidBody { .. } => "INVALID_BODY",
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    /// A record with this id is already stored
    #[error("Duplicate record id '{id}'")]
    DuplicateId { id: String },
}

impl StorageError {
    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::DuplicateId { .. } => "DUPLICATE_ID",
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration and seed data
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse config{}: {message}", .file.as_ref().map(|f| format!(" file '{}'", f)).unwrap_or_default())]
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// Invalid value in configuration
    #[error("Invalid value '{value}' for '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// IO error while reading configuration
    #[error("IO error: {message}")]
    IoError { message: String },
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Validation(ValidationError::InvalidJson {
            message: err.to_string(),
        })
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::IoError {
            message: err.to_string(),
        }
    }
}

/// A specialized Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
