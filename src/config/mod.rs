//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::entities::{Dish, Order};
use crate::storage::InMemoryStore;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "GRUBDASH_CONFIG";

/// Environment variable overriding the listening port
pub const PORT_ENV: &str = "PORT";

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

impl ServerConfig {
    /// Address to bind, e.g. "127.0.0.1:5000"
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "grubdash=info,tower_http=info".to_string(),
        }
    }
}

/// Records loaded into the stores at startup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub dishes: Vec<Dish>,
    pub orders: Vec<Order>,
}

impl SeedData {
    /// Check the invariants the API maintains for its own writes:
    /// unique ids, positive prices, positive quantities.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for dish in &self.dishes {
            if !seen.insert(dish.id.as_str()) {
                return Err(invalid("seed.dishes.id", &dish.id, "duplicate id"));
            }
            if dish.price.as_f64().is_none_or(|p| p <= 0.0) {
                return Err(invalid(
                    "seed.dishes.price",
                    &dish.price.to_string(),
                    "price must be positive",
                ));
            }
        }

        let mut seen = HashSet::new();
        for order in &self.orders {
            if !seen.insert(order.id.as_str()) {
                return Err(invalid("seed.orders.id", &order.id, "duplicate id"));
            }
            if order.dishes.is_empty() {
                return Err(invalid("seed.orders.dishes", &order.id, "order has no dishes"));
            }
            if let Some(item) = order
                .dishes
                .iter()
                .find(|item| item.quantity.as_f64().is_none_or(|q| q <= 0.0))
            {
                return Err(invalid(
                    "seed.orders.dishes.quantity",
                    &item.quantity.to_string(),
                    "quantity must be positive",
                ));
            }
        }

        Ok(())
    }

    /// Build the in-memory stores holding the seed records
    pub fn into_stores(self) -> Result<(InMemoryStore<Dish>, InMemoryStore<Order>), ConfigError> {
        self.validate()?;

        let dishes = InMemoryStore::seeded(self.dishes)
            .map_err(|e| invalid("seed.dishes", "", &e.to_string()))?;
        let orders = InMemoryStore::seeded(self.orders)
            .map_err(|e| invalid("seed.orders", "", &e.to_string()))?;

        Ok((dishes, orders))
    }
}

fn invalid(field: &str, value: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        message: message.to_string(),
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub seed: SeedData,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => e.into(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
            file: Some(path.display().to_string()),
            message: e.to_string(),
        })
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load from the file named by `GRUBDASH_CONFIG`, or defaults when unset,
    /// then apply environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let config = match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.is_empty() => Self::from_yaml_file(path)?,
            _ => Self::default(),
        };

        config.with_port_override(std::env::var(PORT_ENV).ok().as_deref())
    }

    /// Apply a `PORT` override, if one is given
    pub fn with_port_override(mut self, port: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(port) = port.filter(|p| !p.is_empty()) {
            self.server.port = port
                .parse()
                .map_err(|_| invalid(PORT_ENV, port, "expected a port number"))?;
        }
        Ok(self)
    }
}
