//! Order entity module

pub mod descriptor;
pub mod handlers;
pub mod model;
pub mod validation;

pub use descriptor::OrderDescriptor;
pub use handlers::*;
pub use model::{LineItem, Order, OrderStatus};
pub use validation::{OrderInput, validate_order, validate_status_update};
