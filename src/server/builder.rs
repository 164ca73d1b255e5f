//! ServerBuilder for fluent API to build the HTTP server

use super::entity_registry::EntityRegistry;
use super::router::{health_routes, path_not_found};
use crate::core::RecordStore;
use crate::entities::{Dish, DishDescriptor, Order, OrderDescriptor};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for creating the HTTP server
///
/// Stores are injected, so any [`RecordStore`] implementation can back the
/// API.
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_dish_store(InMemoryStore::<Dish>::new())
///     .with_order_store(InMemoryStore::<Order>::new())
///     .build()?;
/// ```
pub struct ServerBuilder {
    dish_store: Option<Arc<dyn RecordStore<Dish>>>,
    order_store: Option<Arc<dyn RecordStore<Order>>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            dish_store: None,
            order_store: None,
            custom_routes: Vec::new(),
        }
    }

    /// Set the dish store (required)
    pub fn with_dish_store(mut self, store: impl RecordStore<Dish> + 'static) -> Self {
        self.dish_store = Some(Arc::new(store));
        self
    }

    /// Set the order store (required)
    pub fn with_order_store(mut self, store: impl RecordStore<Order> + 'static) -> Self {
        self.order_store = Some(Arc::new(store));
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Register every resource with its store
    fn build_registry(&mut self) -> Result<EntityRegistry> {
        let dish_store = self
            .dish_store
            .take()
            .ok_or_else(|| anyhow::anyhow!("Dish store is required. Call .with_dish_store()"))?;
        let order_store = self
            .order_store
            .take()
            .ok_or_else(|| anyhow::anyhow!("Order store is required. Call .with_order_store()"))?;

        let mut registry = EntityRegistry::new();
        registry.register(Box::new(DishDescriptor::new(dish_store)));
        registry.register(Box::new(OrderDescriptor::new(order_store)));
        Ok(registry)
    }

    /// Build the final router
    ///
    /// This generates:
    /// - resource routes for dishes and orders
    /// - the health check route
    /// - a 404 fallback for unknown paths
    /// - request tracing and permissive CORS
    pub fn build(mut self) -> Result<Router> {
        let registry = self.build_registry()?;
        tracing::debug!(resources = ?registry.collection_paths(), "Registered resources");

        let mut app = health_routes().merge(registry.build_routes());
        for custom_router in self.custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app.fallback(path_not_found).layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        ))
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the provided address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryStore;

    #[test]
    fn test_build_without_dish_store_fails() {
        let result = ServerBuilder::new()
            .with_order_store(InMemoryStore::<Order>::new())
            .build();

        let err = result.err().map(|e| e.to_string()).unwrap_or_default();
        assert!(err.contains("Dish store is required"));
    }

    #[test]
    fn test_build_without_order_store_fails() {
        let result = ServerBuilder::new()
            .with_dish_store(InMemoryStore::<Dish>::new())
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_build_with_both_stores() {
        let result = ServerBuilder::new()
            .with_dish_store(InMemoryStore::<Dish>::new())
            .with_order_store(InMemoryStore::<Order>::new())
            .with_custom_routes(Router::new())
            .build();

        assert!(result.is_ok());
    }
}
