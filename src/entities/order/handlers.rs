//! Order HTTP handlers
//!
//! Pipelines:
//! - create:  validate → append
//! - update:  resolve → validate → status check → id check → replace
//! - read:    resolve
//! - list
//! - destroy: resolve → pending check → remove

use super::model::Order;
use super::validation::{
    check_transition, ensure_deletable, initial_status, validate_order, validate_status_update,
};
use crate::core::validation::ensure_matching_id;
use crate::core::{ApiResult, DataBody, Payload, RecordStore, next_id};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

/// Order-specific AppState
#[derive(Clone)]
pub struct OrderAppState {
    pub store: Arc<dyn RecordStore<Order>>,
}

/// Resolve the order named in the route or fail with 404
pub async fn order_exists(store: &dyn RecordStore<Order>, order_id: &str) -> ApiResult<Order> {
    store.require(order_id).await
}

pub async fn list_orders(
    State(state): State<OrderAppState>,
) -> ApiResult<Json<DataBody<Vec<Order>>>> {
    let orders = state.store.list().await?;
    Ok(Json(DataBody::new(orders)))
}

pub async fn create_order(
    State(state): State<OrderAppState>,
    Payload(data): Payload,
) -> ApiResult<(StatusCode, Json<DataBody<Order>>)> {
    let input = validate_order(&data)?;
    let status = initial_status(&input)?;

    let order = state
        .store
        .append(input.into_order(next_id(), status))
        .await?;
    tracing::info!(order_id = %order.id, status = %order.status, "Order created");

    Ok((StatusCode::CREATED, Json(DataBody::new(order))))
}

pub async fn get_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
) -> ApiResult<Json<DataBody<Order>>> {
    let order = order_exists(state.store.as_ref(), &order_id).await?;
    Ok(Json(DataBody::new(order)))
}

pub async fn update_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
    Payload(data): Payload,
) -> ApiResult<Json<DataBody<Order>>> {
    let current = order_exists(state.store.as_ref(), &order_id).await?;
    let input = validate_order(&data)?;
    let status = validate_status_update(&input, &current)?;
    ensure_matching_id(&order_id, input.id.as_deref())?;

    // The stored status may have moved since it was read; re-check under the write lock.
    let order = state
        .store
        .replace_if(&order_id, input.into_order(order_id.clone(), status), &|stored: &Order| {
            check_transition(stored.status, status).map_err(Into::into)
        })
        .await?;
    tracing::info!(order_id = %order.id, status = %order.status, "Order updated");

    Ok(Json(DataBody::new(order)))
}

pub async fn delete_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
) -> ApiResult<StatusCode> {
    order_exists(state.store.as_ref(), &order_id).await?;

    state
        .store
        .remove_if(&order_id, &|stored: &Order| {
            ensure_deletable(stored).map_err(Into::into)
        })
        .await?;
    tracing::info!(order_id = %order_id, "Order deleted");

    Ok(StatusCode::NO_CONTENT)
}
