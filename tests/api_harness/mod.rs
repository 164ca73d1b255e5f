//! Shared fixtures for the HTTP API tests
//!
//! Every test gets its own server backed by fresh in-memory stores seeded
//! with the records below.

#![allow(dead_code)]

use axum_test::TestServer;
use grubdash::prelude::*;
use serde_json::{Value, json};

pub const SEEDED_DISH: &str = "3c637d011d844ebab1205fef8a7e36ea";
pub const PENDING_ORDER: &str = "f6069a542257054114138301947672ba";
pub const PREPARING_ORDER: &str = "5a887d326e83d3c5bdcbee398ea32aff";
pub const DELIVERED_ORDER: &str = "90c3d873684bf381dfab29034b5bba73";

pub fn seed_dishes() -> Vec<Dish> {
    serde_json::from_value(json!([
        {
            "id": SEEDED_DISH,
            "name": "Century Eggs",
            "description": "Whole eggs preserved in clay and ash for a few months",
            "price": 17,
            "image_url": "https://images.example.com/century-eggs.jpg"
        }
    ]))
    .unwrap()
}

pub fn seed_orders() -> Vec<Order> {
    let order = |id: &str, status: &str| {
        json!({
            "id": id,
            "deliverTo": "1600 Pennsylvania Avenue NW, Washington, DC 20500",
            "mobileNumber": "(202) 456-1111",
            "status": status,
            "dishes": [{ "id": SEEDED_DISH, "quantity": 2 }]
        })
    };

    serde_json::from_value(json!([
        order(PENDING_ORDER, "pending"),
        order(PREPARING_ORDER, "preparing"),
        order(DELIVERED_ORDER, "delivered"),
    ]))
    .unwrap()
}

/// Test server over seeded stores
pub fn test_server() -> TestServer {
    let app = ServerBuilder::new()
        .with_dish_store(InMemoryStore::seeded(seed_dishes()).unwrap())
        .with_order_store(InMemoryStore::seeded(seed_orders()).unwrap())
        .build()
        .unwrap();

    TestServer::new(app)
}

/// Request body wrapping `data` in the API envelope
pub fn envelope(data: Value) -> Value {
    json!({ "data": data })
}

pub fn taco() -> Value {
    json!({
        "name": "Taco",
        "description": "spicy",
        "price": 5,
        "image_url": "http://x"
    })
}

pub fn new_order() -> Value {
    json!({
        "deliverTo": "308 Negra Arroyo Lane, Albuquerque, NM",
        "mobileNumber": "(505) 143-3369",
        "status": "pending",
        "dishes": [
            { "id": SEEDED_DISH, "name": "Century Eggs", "price": 17, "quantity": 2 }
        ]
    })
}

/// Same fields as `base` with `field` replaced
pub fn with(base: Value, field: &str, value: Value) -> Value {
    let mut base = base;
    base[field] = value;
    base
}

/// Same fields as `base` without `field`
pub fn without(base: Value, field: &str) -> Value {
    let mut base = base;
    if let Some(map) = base.as_object_mut() {
        map.remove(field);
    }
    base
}

/// The `error` message of an error response body
pub fn error_message(body: &Value) -> &str {
    body["error"].as_str().unwrap_or_default()
}
