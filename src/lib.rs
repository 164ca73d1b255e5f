//! # GrubDash
//!
//! A small REST API managing two related resources: menu **dishes** and
//! delivery **orders**.
//!
//! ## Features
//!
//! - **Validated pipelines**: every request runs validator → existence guard →
//!   handler, stopping at the first failure with a typed [`ApiError`](core::ApiError)
//! - **Order lifecycle**: `pending → preparing → out-for-delivery → delivered`,
//!   delivered orders are immutable and only pending orders can be deleted
//! - **Injected storage**: handlers talk to a [`RecordStore`](core::RecordStore);
//!   the bundled [`InMemoryStore`](storage::InMemoryStore) keeps insertion order
//! - **Configuration-Based**: listener, logging and seed records via YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use grubdash::prelude::*;
//!
//! let config = AppConfig::load()?;
//! let (dishes, orders) = config.seed.into_stores()?;
//!
//! ServerBuilder::new()
//!     .with_dish_store(dishes)
//!     .with_order_store(orders)
//!     .serve(&config.server.addr())
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ApiError, ApiResult, DataBody, EntityError, Payload, Record, RecordStore,
        RequestError, ValidationError, next_id,
    };

    // === Resources ===
    pub use crate::entities::{
        Dish, DishDescriptor, LineItem, Order, OrderDescriptor, OrderStatus,
    };

    // === Storage ===
    pub use crate::storage::InMemoryStore;

    // === Config ===
    pub use crate::config::{AppConfig, LoggingConfig, SeedData, ServerConfig};

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder};

    // === External dependencies ===
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}
