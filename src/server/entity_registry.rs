//! Entity registry collecting the routes of every resource

use axum::Router;

/// Trait that describes how to build routes for a resource
///
/// Dishes and orders each implement this to contribute their routes.
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g., "order")
    fn entity_type(&self) -> &str;

    /// The plural form used as the collection path (e.g., "orders")
    fn plural(&self) -> &str;

    /// Build the routes for this resource, state already applied
    fn build_routes(&self) -> Router;
}

/// Registry for all resources of the application
///
/// Keeps registration order; registering the same entity type twice
/// replaces the earlier descriptor.
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: Vec<Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /// Register a resource descriptor
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        match self
            .descriptors
            .iter_mut()
            .find(|d| d.entity_type() == descriptor.entity_type())
        {
            Some(slot) => *slot = descriptor,
            None => self.descriptors.push(descriptor),
        }
    }

    /// Merge the routes of every registered resource into one router
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .iter()
            .fold(Router::new(), |router, d| router.merge(d.build_routes()))
    }

    /// Registered entity types, in registration order
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.iter().map(|d| d.entity_type()).collect()
    }

    /// Collection paths of registered resources (e.g. "/dishes")
    pub fn collection_paths(&self) -> Vec<String> {
        self.descriptors
            .iter()
            .map(|d| format!("/{}", d.plural()))
            .collect()
    }
}
