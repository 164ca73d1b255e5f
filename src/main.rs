//! GrubDash API server
//!
//! Configuration comes from the YAML file named by `GRUBDASH_CONFIG`
//! (defaults otherwise); `PORT` overrides the listening port and `RUST_LOG`
//! overrides the configured log filter.

use anyhow::Result;
use grubdash::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let (dishes, orders) = config.seed.into_stores()?;
    tracing::info!(
        dishes = dishes.count().await?,
        orders = orders.count().await?,
        "Stores seeded"
    );

    ServerBuilder::new()
        .with_dish_store(dishes)
        .with_order_store(orders)
        .serve(&config.server.addr())
        .await
}
