//! Routes shared by every resource: health check and fallbacks

use crate::core::error::{ApiError, RequestError};
use axum::http::{Method, Uri};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

/// Health check routes
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME")
    }))
}

/// Fallback for a known path hit with a verb it does not support (405)
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    RequestError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
    .into()
}

/// Fallback for paths no route matches (404)
pub async fn path_not_found(uri: Uri) -> ApiError {
    RequestError::PathNotFound {
        path: uri.path().to_string(),
    }
    .into()
}
