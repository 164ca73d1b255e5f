//! Server module for building the HTTP server
//!
//! This module provides a `ServerBuilder` that registers:
//! - dish and order routes through their entity descriptors
//! - the health check route
//! - 404/405 fallbacks reported through the common error body

pub mod builder;
pub mod entity_registry;
pub mod router;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
