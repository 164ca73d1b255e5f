//! Tests for loading configuration files and serving their seed records

use axum::http::StatusCode;
use axum_test::TestServer;
use grubdash::core::error::ConfigError;
use grubdash::prelude::*;
use serde_json::Value;
use std::io::Write;
use tempfile::NamedTempFile;

const SAMPLE_CONFIG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/config/grubdash.yaml");

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();
    file
}

#[test]
fn test_sample_config_loads() {
    let config = AppConfig::from_yaml_file(SAMPLE_CONFIG).unwrap();

    assert_eq!(config.server.addr(), "127.0.0.1:5000");
    assert_eq!(config.seed.dishes.len(), 2);
    assert_eq!(config.seed.orders[1].status, OrderStatus::Delivered);
    assert!(config.seed.validate().is_ok());
}

#[test]
fn test_missing_file_is_reported() {
    let err = AppConfig::from_yaml_file("/nonexistent/grubdash.yaml").unwrap_err();

    assert!(matches!(err, ConfigError::FileNotFound { .. }));
}

#[test]
fn test_parse_error_names_the_file() {
    let file = write_config("server:\n  port: not-a-port\n");

    let err = AppConfig::from_yaml_file(file.path()).unwrap_err();

    assert!(matches!(err, ConfigError::ParseError { file: Some(_), .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}

#[test]
fn test_seed_order_with_zero_quantity_is_rejected() {
    let file = write_config(
        r#"
seed:
  orders:
    - id: o1
      deliverTo: somewhere
      mobileNumber: "555"
      dishes:
        - { id: d1, quantity: 0 }
"#,
    );

    let config = AppConfig::from_yaml_file(file.path()).unwrap();

    assert!(matches!(
        config.seed.validate(),
        Err(ConfigError::InvalidValue { field, .. }) if field == "seed.orders.dishes.quantity"
    ));
}

#[tokio::test]
async fn test_seeded_records_are_served() {
    let config = AppConfig::from_yaml_file(SAMPLE_CONFIG).unwrap();
    let (dishes, orders) = config.seed.into_stores().unwrap();

    let app = ServerBuilder::new()
        .with_dish_store(dishes)
        .with_order_store(orders)
        .build()
        .unwrap();
    let server = TestServer::new(app);

    let body: Value = server.get("/dishes").await.json();
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
    assert_eq!(body["data"][1]["name"], "Falafel and tahini bagel");

    let response = server.get("/orders/f6069a542257054114138301947672ba").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["status"], "out-for-delivery");
    assert_eq!(body["data"]["dishes"][0]["quantity"], 1);

    server
        .delete("/orders/5a887d326e83d3c5bdcbee398ea32aff")
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}
