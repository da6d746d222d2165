// Ports define what the item handlers need from storage, without implementing it.
//
// Boundaries
// - No concrete storage here. Adapters implement ItemStore in the adapters layer.
// - Duplicate ids resolve to the last matching record (see core::lookup).

use crate::modules::items::core::record::Record;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Every record in insertion order.
    async fn list(&self) -> Result<Vec<Record>, StoreError>;

    async fn find(&self, id: &str) -> Result<Option<Record>, StoreError>;

    /// Append unconditionally, duplicates included.
    async fn append(&self, record: Record) -> Result<(), StoreError>;

    /// Replace the last record with `record.id` in place.
    /// Returns `false` when nothing matched.
    async fn replace(&self, record: Record) -> Result<bool, StoreError>;

    /// Remove exactly one record, the last one with `id`.
    /// Returns `false` when nothing matched.
    async fn remove(&self, id: &str) -> Result<bool, StoreError>;
}
