//! Entity descriptor for Order

use super::handlers::{
    OrderAppState, create_order, delete_order, get_order, list_orders, update_order,
};
use super::model::Order;
use crate::core::{Record, RecordStore};
use crate::server::entity_registry::EntityDescriptor;
use crate::server::router::method_not_allowed;
use axum::{Router, routing::get};
use std::sync::Arc;

/// Descriptor for the Order entity
pub struct OrderDescriptor {
    pub store: Arc<dyn RecordStore<Order>>,
}

impl OrderDescriptor {
    pub fn new(store: Arc<dyn RecordStore<Order>>) -> Self {
        Self { store }
    }
}

impl EntityDescriptor for OrderDescriptor {
    fn entity_type(&self) -> &str {
        "order"
    }

    fn plural(&self) -> &str {
        Order::resource_name()
    }

    fn build_routes(&self) -> Router {
        let state = OrderAppState {
            store: self.store.clone(),
        };

        Router::new()
            .route(
                "/orders",
                get(list_orders)
                    .post(create_order)
                    .fallback(method_not_allowed),
            )
            .route(
                "/orders/{orderId}",
                get(get_order)
                    .put(update_order)
                    .delete(delete_order)
                    .fallback(method_not_allowed),
            )
            .with_state(state)
    }
}
