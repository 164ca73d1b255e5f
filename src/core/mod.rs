//! Core module containing the fundamental traits and types of the API

pub mod entity;
pub mod error;
pub mod extractors;
pub mod service;
pub mod validation;

pub use entity::{Record, next_id};
pub use error::{ApiError, ApiResult, EntityError, RequestError, ValidationError};
pub use extractors::{DataBody, Payload};
pub use service::{RecordGuard, RecordStore};
