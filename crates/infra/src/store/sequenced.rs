use std::collections::BTreeMap;
use std::sync::RwLock;

use fulfilment_core::{DomainError, DomainResult};

/// Rows keyed by a store-assigned, monotonically increasing id (starting at 1).
/// Ids of deleted rows are never reused.
#[derive(Debug)]
pub(crate) struct SequencedTable<T> {
    label: &'static str,
    inner: RwLock<Rows<T>>,
}

#[derive(Debug)]
struct Rows<T> {
    next_id: u64,
    rows: BTreeMap<u64, T>,
}

impl<T: Clone> SequencedTable<T> {
    pub(crate) fn new(label: &'static str) -> Self {
        Self {
            label,
            inner: RwLock::new(Rows {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    fn poisoned(&self) -> DomainError {
        DomainError::storage(format!("{} table lock poisoned", self.label))
    }

    pub(crate) fn list(&self) -> DomainResult<Vec<T>> {
        let inner = self.inner.read().map_err(|_| self.poisoned())?;
        Ok(inner.rows.values().cloned().collect())
    }

    pub(crate) fn find(&self, id: u64) -> DomainResult<Option<T>> {
        let inner = self.inner.read().map_err(|_| self.poisoned())?;
        Ok(inner.rows.get(&id).cloned())
    }

    pub(crate) fn insert_with(&self, build: impl FnOnce(u64) -> T) -> DomainResult<T> {
        let mut inner = self.inner.write().map_err(|_| self.poisoned())?;
        let id = inner.next_id;
        inner.next_id += 1;
        let row = build(id);
        inner.rows.insert(id, row.clone());
        Ok(row)
    }

    /// Returns `false` when no row has this id.
    pub(crate) fn replace(&self, id: u64, row: T) -> DomainResult<bool> {
        let mut inner = self.inner.write().map_err(|_| self.poisoned())?;
        match inner.rows.get_mut(&id) {
            Some(slot) => {
                *slot = row;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub(crate) fn remove(&self, id: u64) -> DomainResult<bool> {
        let mut inner = self.inner.write().map_err(|_| self.poisoned())?;
        Ok(inner.rows.remove(&id).is_some())
    }
}
