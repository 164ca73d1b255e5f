//! Axum extractors and response envelopes
//!
//! Request and response bodies share one envelope: `{ "data": ... }`.

use crate::core::error::{ApiError, RequestError};
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `data` object of a request body
///
/// A missing body or a body without `data` yields an empty object, so the
/// resource validators report which fields are missing. Malformed JSON and a
/// `data` value that is not an object are rejected outright.
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_dish(
///     State(state): State<DishAppState>,
///     Payload(data): Payload,
/// ) -> ApiResult<(StatusCode, Json<DataBody<Dish>>)> {
///     let input = validate_dish(&data)?;
///     // ...
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Payload(pub Map<String, Value>);

impl Payload {
    /// Unwrap the `data` member of a decoded body
    pub fn from_body(body: Value) -> Result<Self, ApiError> {
        match body {
            Value::Null => Ok(Self::default()),
            Value::Object(mut envelope) => match envelope.remove("data") {
                None | Some(Value::Null) => Ok(Self::default()),
                Some(Value::Object(data)) => Ok(Self(data)),
                Some(_) => Err(RequestError::InvalidBody {
                    message: "'data' must be an object".to_string(),
                }
                .into()),
            },
            _ => Err(RequestError::InvalidBody {
                message: "expected a JSON object".to_string(),
            }
            .into()),
        }
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| RequestError::InvalidBody {
                message: e.body_text(),
            })?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let body: Value = serde_json::from_slice(&bytes)?;
        Self::from_body(body)
    }
}

/// Response envelope: `{ "data": <record or collection> }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataBody<T> {
    pub data: T,
}

impl<T> DataBody<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
