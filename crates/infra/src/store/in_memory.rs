use std::collections::BTreeMap;
use std::sync::RwLock;

use fulfilment_core::{BusinessUnitCode, DomainError, DomainResult};
use fulfilment_warehouses::{Warehouse, WarehouseStore};

/// In-memory warehouse store keyed by business-unit code.
///
/// Intended for tests/dev. Every call takes the lock once, so each call sees a
/// consistent snapshot; sequences of calls are not atomic.
#[derive(Debug, Default)]
pub struct InMemoryWarehouseStore {
    rows: RwLock<BTreeMap<BusinessUnitCode, Warehouse>>,
}

impl InMemoryWarehouseStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> DomainError {
        DomainError::storage("warehouse store lock poisoned")
    }
}

impl WarehouseStore for InMemoryWarehouseStore {
    /// Ordered by business-unit code.
    fn get_all(&self) -> DomainResult<Vec<Warehouse>> {
        let rows = self.rows.read().map_err(|_| Self::poisoned())?;
        Ok(rows.values().cloned().collect())
    }

    fn find_by_business_unit_code(
        &self,
        code: &BusinessUnitCode,
    ) -> DomainResult<Option<Warehouse>> {
        let rows = self.rows.read().map_err(|_| Self::poisoned())?;
        Ok(rows.get(code).cloned())
    }

    fn create(&self, warehouse: &Warehouse) -> DomainResult<()> {
        let mut rows = self.rows.write().map_err(|_| Self::poisoned())?;
        if rows.contains_key(&warehouse.business_unit_code) {
            return Err(DomainError::conflict(format!(
                "warehouse {} already stored",
                warehouse.business_unit_code
            )));
        }
        rows.insert(warehouse.business_unit_code.clone(), warehouse.clone());
        Ok(())
    }

    /// Overwrites location, capacity, stock and archive timestamp. The stored
    /// `created_at` is kept.
    fn update(&self, warehouse: &Warehouse) -> DomainResult<()> {
        let mut rows = self.rows.write().map_err(|_| Self::poisoned())?;
        let row = rows
            .get_mut(&warehouse.business_unit_code)
            .ok_or_else(|| {
                DomainError::not_found(format!("warehouse {} not stored", warehouse.business_unit_code))
            })?;

        row.location = warehouse.location.clone();
        row.capacity = warehouse.capacity;
        row.stock = warehouse.stock;
        row.archived_at = warehouse.archived_at;
        Ok(())
    }

    fn remove(&self, warehouse: &Warehouse) -> DomainResult<()> {
        let mut rows = self.rows.write().map_err(|_| Self::poisoned())?;
        rows.remove(&warehouse.business_unit_code);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use fulfilment_core::{ErrorKind, LocationId};

    fn warehouse(code: &str, capacity: u32, stock: u32) -> Warehouse {
        Warehouse::new(
            BusinessUnitCode::new(code).unwrap(),
            LocationId::new("AMSTERDAM-001").unwrap(),
            capacity,
            stock,
        )
    }

    #[test]
    fn create_then_find() {
        let store = InMemoryWarehouseStore::new();
        store.create(&warehouse("MWH.012", 50, 5)).unwrap();

        let found = store
            .find_by_business_unit_code(&BusinessUnitCode::new("MWH.012").unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(found.capacity, 50);
        assert!(store
            .find_by_business_unit_code(&BusinessUnitCode::new("MWH.999").unwrap())
            .unwrap()
            .is_none());
    }

    #[test]
    fn duplicate_create_is_a_conflict() {
        let store = InMemoryWarehouseStore::new();
        store.create(&warehouse("MWH.012", 50, 5)).unwrap();
        let err = store.create(&warehouse("MWH.012", 10, 0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[test]
    fn update_keeps_created_at() {
        let store = InMemoryWarehouseStore::new();
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let mut original = warehouse("MWH.012", 50, 5);
        original.created_at = Some(created);
        store.create(&original).unwrap();

        let mut changed = warehouse("MWH.012", 70, 5);
        changed.location = LocationId::new("EINDHOVEN-001").unwrap();
        store.update(&changed).unwrap();

        let stored = store.get_all().unwrap().remove(0);
        assert_eq!(stored.capacity, 70);
        assert_eq!(stored.location.as_str(), "EINDHOVEN-001");
        assert_eq!(stored.created_at, Some(created));
    }

    #[test]
    fn update_of_missing_row_is_not_found() {
        let store = InMemoryWarehouseStore::new();
        let err = store.update(&warehouse("GHOST", 1, 0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn get_all_is_ordered_and_remove_deletes() {
        let store = InMemoryWarehouseStore::new();
        store.create(&warehouse("MWH.023", 30, 27)).unwrap();
        store.create(&warehouse("MWH.001", 100, 10)).unwrap();

        let codes: Vec<_> = store
            .get_all()
            .unwrap()
            .into_iter()
            .map(|w| w.business_unit_code.to_string())
            .collect();
        assert_eq!(codes, vec!["MWH.001", "MWH.023"]);

        store.remove(&warehouse("MWH.001", 0, 0)).unwrap();
        store.remove(&warehouse("MWH.001", 0, 0)).unwrap();
        assert_eq!(store.get_all().unwrap().len(), 1);
    }
}
