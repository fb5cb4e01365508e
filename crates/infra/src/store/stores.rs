use fulfilment_core::{DomainError, DomainResult};
use fulfilment_stores::{Store, StoreDraft, StoreId, StoreRepository};

use super::sequenced::SequencedTable;

/// In-memory retail store repository (tests/dev).
#[derive(Debug)]
pub struct InMemoryStoreRepository {
    table: SequencedTable<Store>,
}

impl InMemoryStoreRepository {
    pub fn new() -> Self {
        Self {
            table: SequencedTable::new("store"),
        }
    }
}

impl Default for InMemoryStoreRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreRepository for InMemoryStoreRepository {
    fn list(&self) -> DomainResult<Vec<Store>> {
        self.table.list()
    }

    fn find(&self, id: StoreId) -> DomainResult<Option<Store>> {
        self.table.find(id.0)
    }

    fn insert(&self, draft: &StoreDraft) -> DomainResult<Store> {
        self.table
            .insert_with(|id| Store::from_draft(StoreId(id), draft.clone()))
    }

    fn save(&self, store: &Store) -> DomainResult<()> {
        if !self.table.replace(store.id.0, store.clone())? {
            return Err(DomainError::not_found(format!("store {} not stored", store.id)));
        }
        Ok(())
    }

    fn delete(&self, id: StoreId) -> DomainResult<bool> {
        self.table.remove(id.0)
    }
}
