//! Storage trait consumed by the request pipelines

use crate::core::entity::Record;
use crate::core::error::{ApiResult, EntityError};
use async_trait::async_trait;

/// Check run against the stored record before a guarded mutation.
///
/// Returning an error aborts the mutation and leaves the record untouched.
pub type RecordGuard<'a, T> = &'a (dyn Fn(&T) -> ApiResult<()> + Send + Sync);

/// Ordered collection of records of one type.
///
/// The pipelines only need append, lookup by id, replace-in-place and removal.
/// Guarded mutations must evaluate the guard and apply the change as one
/// atomic step, so a record cannot change between the check and the write.
#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    /// Append a record at the end of the collection
    async fn append(&self, record: T) -> ApiResult<T>;

    /// Get a record by id
    async fn find(&self, id: &str) -> ApiResult<Option<T>>;

    /// Resolve a record by id, failing with a not-found error when absent
    async fn require(&self, id: &str) -> ApiResult<T> {
        self.find(id)
            .await?
            .ok_or_else(|| EntityError::not_found(T::entity_type(), id).into())
    }

    /// List all records in stored order
    async fn list(&self) -> ApiResult<Vec<T>>;

    /// Replace the record with this id in place, keeping its position.
    ///
    /// Fails with a not-found error when no record matches.
    async fn replace_if(&self, id: &str, record: T, guard: RecordGuard<'_, T>) -> ApiResult<T>;

    /// Remove the record with this id.
    ///
    /// Fails with a not-found error when no record matches.
    async fn remove_if(&self, id: &str, guard: RecordGuard<'_, T>) -> ApiResult<T>;

    /// Number of stored records
    async fn count(&self) -> ApiResult<usize> {
        Ok(self.list().await?.len())
    }

    /// Unconditional replace
    async fn replace(&self, id: &str, record: T) -> ApiResult<T> {
        self.replace_if(id, record, &|_| Ok(())).await
    }
}
