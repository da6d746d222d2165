// In memory implementation of the ItemStore port.
//
// Purpose
// - Hold the single ordered record sequence for the lifetime of the process.
//
// Responsibilities
// - Keep records in insertion order; deletion shifts later records left.
// - Run each scan-and-mutate under one write lock so concurrent requests
//   cannot act on stale indices.

use crate::modules::items::core::lookup::{find_by_id, last_position};
use crate::modules::items::core::ports::{ItemStore, StoreError};
use crate::modules::items::core::record::Record;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryItemStore {
    records: RwLock<Vec<Record>>,
    is_offline: bool,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding only the seed record.
    pub fn seeded() -> Self {
        Self::with_records(vec![Record::seed()])
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records: RwLock::new(records),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Item store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ItemStore for InMemoryItemStore {
    async fn list(&self) -> Result<Vec<Record>, StoreError> {
        self.ensure_online()?;
        Ok(self.records.read().await.clone())
    }

    async fn find(&self, id: &str) -> Result<Option<Record>, StoreError> {
        self.ensure_online()?;
        let guard = self.records.read().await;
        Ok(find_by_id(&guard, id).cloned())
    }

    async fn append(&self, record: Record) -> Result<(), StoreError> {
        self.ensure_online()?;
        self.records.write().await.push(record);
        Ok(())
    }

    async fn replace(&self, record: Record) -> Result<bool, StoreError> {
        self.ensure_online()?;
        let mut guard = self.records.write().await;
        match last_position(&guard, &record.id) {
            Some(index) => {
                guard[index] = record;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: &str) -> Result<bool, StoreError> {
        self.ensure_online()?;
        let mut guard = self.records.write().await;
        match last_position(&guard, id) {
            Some(index) => {
                guard.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
