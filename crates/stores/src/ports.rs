use std::sync::Arc;

use fulfilment_core::DomainResult;

use crate::store::{Store, StoreDraft, StoreId};

/// Persistent storage of retail stores.
#[cfg_attr(test, mockall::automock)]
pub trait StoreRepository: Send + Sync {
    /// Ordered by id.
    fn list(&self) -> DomainResult<Vec<Store>>;
    fn find(&self, id: StoreId) -> DomainResult<Option<Store>>;
    fn insert(&self, draft: &StoreDraft) -> DomainResult<Store>;
    /// `NotFound` when the id is not stored.
    fn save(&self, store: &Store) -> DomainResult<()>;
    fn delete(&self, id: StoreId) -> DomainResult<bool>;
}

impl<R> StoreRepository for Arc<R>
where
    R: StoreRepository + ?Sized,
{
    fn list(&self) -> DomainResult<Vec<Store>> {
        (**self).list()
    }

    fn find(&self, id: StoreId) -> DomainResult<Option<Store>> {
        (**self).find(id)
    }

    fn insert(&self, draft: &StoreDraft) -> DomainResult<Store> {
        (**self).insert(draft)
    }

    fn save(&self, store: &Store) -> DomainResult<()> {
        (**self).save(store)
    }

    fn delete(&self, id: StoreId) -> DomainResult<bool> {
        (**self).delete(id)
    }
}
