//! Macros for reducing boilerplate when defining records

/// Implement [`Record`](crate::core::Record) for a struct with an `id: String` field
///
/// # Example
/// ```rust,ignore
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct Dish {
///     pub id: String,
///     pub name: String,
/// }
///
/// impl_record!(Dish, "Dish", "dishes");
/// ```
#[macro_export]
macro_rules! impl_record {
    ($type:ident, $entity_type:literal, $resource:literal) => {
        impl $crate::core::entity::Record for $type {
            fn resource_name() -> &'static str {
                $resource
            }

            fn entity_type() -> &'static str {
                $entity_type
            }

            fn id(&self) -> &str {
                &self.id
            }
        }
    };
}
