use tracing::info;

use fulfilment_core::{DomainError, DomainResult};

use crate::ports::StoreRepository;
use crate::store::{Store, StoreDraft, StoreId, StorePatch};

/// Store CRUD. Payload checks run before the existence check.
pub struct StoreDirectory<R> {
    repository: R,
}

impl<R> StoreDirectory<R>
where
    R: StoreRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub fn list(&self) -> DomainResult<Vec<Store>> {
        self.repository.list()
    }

    pub fn get(&self, id: StoreId) -> DomainResult<Store> {
        self.repository.find(id)?.ok_or_else(|| missing(id))
    }

    #[tracing::instrument(name = "store.create", skip_all, fields(name = %draft.name))]
    pub fn create(&self, draft: StoreDraft) -> DomainResult<Store> {
        draft.validate()?;
        let store = self.repository.insert(&draft)?;
        info!(id = %store.id, "store created");
        Ok(store)
    }

    #[tracing::instrument(name = "store.replace", skip_all, fields(id = %id))]
    pub fn replace(&self, id: StoreId, draft: StoreDraft) -> DomainResult<Store> {
        draft.validate()?;
        let mut store = self.get(id)?;
        store.replace(draft);
        self.repository.save(&store)?;
        info!("store replaced");
        Ok(store)
    }

    #[tracing::instrument(name = "store.patch", skip_all, fields(id = %id))]
    pub fn patch(&self, id: StoreId, patch: StorePatch) -> DomainResult<Store> {
        patch.validate()?;
        let mut store = self.get(id)?;
        store.patch(patch);
        self.repository.save(&store)?;
        info!("store patched");
        Ok(store)
    }

    #[tracing::instrument(name = "store.delete", skip_all, fields(id = %id))]
    pub fn delete(&self, id: StoreId) -> DomainResult<()> {
        if !self.repository.delete(id)? {
            return Err(missing(id));
        }
        info!("store deleted");
        Ok(())
    }
}

fn missing(id: StoreId) -> DomainError {
    DomainError::not_found(format!("Store with id of {id} does not exist."))
}
