//! Dish HTTP handlers
//!
//! Pipelines:
//! - create: validate → append
//! - update: resolve → validate → id check → replace
//! - read:   resolve
//! - list

use super::model::Dish;
use super::validation::validate_dish;
use crate::core::validation::ensure_matching_id;
use crate::core::{ApiResult, DataBody, Payload, RecordStore, next_id};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

/// Dish-specific AppState
#[derive(Clone)]
pub struct DishAppState {
    pub store: Arc<dyn RecordStore<Dish>>,
}

/// Resolve the dish named in the route or fail with 404
pub async fn dish_exists(store: &dyn RecordStore<Dish>, dish_id: &str) -> ApiResult<Dish> {
    store.require(dish_id).await
}

pub async fn list_dishes(State(state): State<DishAppState>) -> ApiResult<Json<DataBody<Vec<Dish>>>> {
    let dishes = state.store.list().await?;
    Ok(Json(DataBody::new(dishes)))
}

pub async fn create_dish(
    State(state): State<DishAppState>,
    Payload(data): Payload,
) -> ApiResult<(StatusCode, Json<DataBody<Dish>>)> {
    let input = validate_dish(&data)?;

    let dish = state.store.append(input.into_dish(next_id())).await?;
    tracing::info!(dish_id = %dish.id, "Dish created");

    Ok((StatusCode::CREATED, Json(DataBody::new(dish))))
}

pub async fn get_dish(
    State(state): State<DishAppState>,
    Path(dish_id): Path<String>,
) -> ApiResult<Json<DataBody<Dish>>> {
    let dish = dish_exists(state.store.as_ref(), &dish_id).await?;
    Ok(Json(DataBody::new(dish)))
}

pub async fn update_dish(
    State(state): State<DishAppState>,
    Path(dish_id): Path<String>,
    Payload(data): Payload,
) -> ApiResult<Json<DataBody<Dish>>> {
    dish_exists(state.store.as_ref(), &dish_id).await?;
    let input = validate_dish(&data)?;
    ensure_matching_id(&dish_id, input.id.as_deref())?;

    let dish = state
        .store
        .replace(&dish_id, input.into_dish(dish_id.clone()))
        .await?;
    tracing::info!(dish_id = %dish.id, "Dish updated");

    Ok(Json(DataBody::new(dish)))
}
