//! In-memory implementation of RecordStore

use crate::core::entity::Record;
use crate::core::error::{ApiResult, EntityError, StorageError};
use crate::core::service::{RecordGuard, RecordStore};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory record store
///
/// Keeps records in insertion order. Uses an async RwLock so every mutation,
/// including its guard, runs under a single write lock.
#[derive(Clone)]
pub struct InMemoryStore<T: Record> {
    records: Arc<RwLock<Vec<T>>>,
}

impl<T: Record> InMemoryStore<T> {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a store pre-populated with records.
    ///
    /// Fails if two records share an id.
    pub fn seeded(records: Vec<T>) -> Result<Self, StorageError> {
        for (index, record) in records.iter().enumerate() {
            if records[..index].iter().any(|r| r.id() == record.id()) {
                return Err(StorageError::DuplicateId {
                    id: record.id().to_string(),
                });
            }
        }

        Ok(Self {
            records: Arc::new(RwLock::new(records)),
        })
    }
}

impl<T: Record> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn position<T: Record>(records: &[T], id: &str) -> ApiResult<usize> {
    records
        .iter()
        .position(|r| r.id() == id)
        .ok_or_else(|| EntityError::not_found(T::entity_type(), id).into())
}

#[async_trait]
impl<T: Record> RecordStore<T> for InMemoryStore<T> {
    async fn append(&self, record: T) -> ApiResult<T> {
        let mut records = self.records.write().await;

        if records.iter().any(|r| r.id() == record.id()) {
            return Err(StorageError::DuplicateId {
                id: record.id().to_string(),
            }
            .into());
        }

        records.push(record.clone());
        Ok(record)
    }

    async fn find(&self, id: &str) -> ApiResult<Option<T>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    async fn list(&self) -> ApiResult<Vec<T>> {
        Ok(self.records.read().await.clone())
    }

    async fn replace_if(&self, id: &str, record: T, guard: RecordGuard<'_, T>) -> ApiResult<T> {
        let mut records = self.records.write().await;
        let index = position(&records, id)?;

        guard(&records[index])?;
        records[index] = record.clone();

        Ok(record)
    }

    async fn remove_if(&self, id: &str, guard: RecordGuard<'_, T>) -> ApiResult<T> {
        let mut records = self.records.write().await;
        let index = position(&records, id)?;

        guard(&records[index])?;

        Ok(records.remove(index))
    }

    async fn count(&self) -> ApiResult<usize> {
        Ok(self.records.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{ApiError, ValidationError};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: String,
        text: String,
    }

    impl Record for Note {
        fn resource_name() -> &'static str {
            "notes"
        }

        fn entity_type() -> &'static str {
            "Note"
        }

        fn id(&self) -> &str {
            &self.id
        }
    }

    fn note(id: &str, text: &str) -> Note {
        Note {
            id: id.to_string(),
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_append_keeps_insertion_order() {
        let store = InMemoryStore::new();
        store.append(note("b", "second")).await.unwrap();
        store.append(note("a", "first")).await.unwrap();

        let ids: Vec<String> = store.list().await.unwrap().into_iter().map(|n| n.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_append_rejects_duplicate_id() {
        let store = InMemoryStore::new();
        store.append(note("a", "one")).await.unwrap();

        let result = store.append(note("a", "two")).await;
        assert!(matches!(
            result,
            Err(ApiError::Storage(StorageError::DuplicateId { .. }))
        ));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_replace_keeps_position() {
        let store = InMemoryStore::seeded(vec![note("a", "1"), note("b", "2"), note("c", "3")])
            .unwrap();

        store.replace("b", note("b", "changed")).await.unwrap();

        let all = store.list().await.unwrap();
        assert_eq!(all[1], note("b", "changed"));
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_replace_unknown_id_is_not_found() {
        let store: InMemoryStore<Note> = InMemoryStore::new();

        let err = store.replace("ghost", note("ghost", "x")).await.unwrap_err();
        assert!(matches!(err, ApiError::Entity(EntityError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_remove_if_guard_blocks_removal() {
        let store = InMemoryStore::seeded(vec![note("a", "locked")]).unwrap();

        let err = store
            .remove_if("a", &|n: &Note| {
                if n.text == "locked" {
                    Err(ValidationError::field("text", "locked").into())
                } else {
                    Ok(())
                }
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        assert!(store.find("a").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_remove_if_removes_record() {
        let store = InMemoryStore::seeded(vec![note("a", "1"), note("b", "2")]).unwrap();

        let removed = store.remove_if("a", &|_| Ok(())).await.unwrap();

        assert_eq!(removed.id, "a");
        assert!(store.find("a").await.unwrap().is_none());
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[test]
    fn test_seeded_rejects_duplicates() {
        let result = InMemoryStore::seeded(vec![note("a", "1"), note("a", "2")]);
        assert!(matches!(result, Err(StorageError::DuplicateId { id }) if id == "a"));
    }
}
