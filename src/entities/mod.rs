//! Resources exposed by the API
//!
//! Each resource lives in its own module with the same layout:
//! `model` (stored record), `validation` (request checks), `handlers`
//! (axum handlers) and `descriptor` (routes).

pub mod dish;
pub mod macros;
pub mod order;

pub use dish::{Dish, DishDescriptor};
pub use order::{LineItem, Order, OrderDescriptor, OrderStatus};
