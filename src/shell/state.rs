use crate::modules::items::adapters::outbound::in_memory_item_store::InMemoryItemStore;
use crate::modules::items::core::ports::ItemStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ItemStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ItemStore>) -> Self {
        Self { store }
    }

    /// State backed by an in-memory store holding the seed record.
    pub fn seeded() -> Self {
        Self::new(Arc::new(InMemoryItemStore::seeded()))
    }
}
