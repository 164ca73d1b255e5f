//! Record trait shared by every stored resource

use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// Base trait for all records kept in a [`RecordStore`](crate::core::RecordStore).
///
/// A record is identified by an opaque string id which is assigned on
/// creation and never changes afterwards.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "dishes")
    fn resource_name() -> &'static str;

    /// Human-readable type name used in error messages (e.g., "Dish")
    fn entity_type() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> &str;
}

/// Allocate a fresh record identifier.
///
/// Identifiers are 32 lowercase hex characters.
pub fn next_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_is_hex_and_unique() {
        let a = next_id();
        let b = next_id();

        assert_eq!(a.len(), 32);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }
}
