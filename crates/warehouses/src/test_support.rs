//! Fakes shared by the rule tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};

use fulfilment_core::{BusinessUnitCode, DomainError, DomainResult, FixedClock, LocationId};

use crate::location::Location;
use crate::ports::{LocationResolver, WarehouseStore};
use crate::warehouse::Warehouse;

pub fn code(s: &str) -> BusinessUnitCode {
    BusinessUnitCode::new(s).unwrap()
}

pub fn loc(s: &str) -> LocationId {
    LocationId::new(s).unwrap()
}

pub fn warehouse(c: &str, location: &str, capacity: u32, stock: u32) -> Warehouse {
    Warehouse::new(code(c), loc(location), capacity, stock)
}

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap()
}

pub fn clock() -> FixedClock {
    FixedClock(t0())
}

/// Keyed by code; counts mutating calls.
#[derive(Debug, Default)]
pub struct FakeStore {
    rows: Mutex<BTreeMap<BusinessUnitCode, Warehouse>>,
    writes: Mutex<usize>,
}

impl FakeStore {
    pub fn with(rows: Vec<Warehouse>) -> Self {
        let store = Self::default();
        {
            let mut map = store.rows.lock().unwrap();
            for w in rows {
                map.insert(w.business_unit_code.clone(), w);
            }
        }
        store
    }

    pub fn get(&self, c: &str) -> Option<Warehouse> {
        self.rows.lock().unwrap().get(&code(c)).cloned()
    }

    pub fn writes(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

impl WarehouseStore for FakeStore {
    fn get_all(&self) -> DomainResult<Vec<Warehouse>> {
        Ok(self.rows.lock().unwrap().values().cloned().collect())
    }

    fn find_by_business_unit_code(
        &self,
        code: &BusinessUnitCode,
    ) -> DomainResult<Option<Warehouse>> {
        Ok(self.rows.lock().unwrap().get(code).cloned())
    }

    fn create(&self, warehouse: &Warehouse) -> DomainResult<()> {
        *self.writes.lock().unwrap() += 1;
        self.rows
            .lock()
            .unwrap()
            .insert(warehouse.business_unit_code.clone(), warehouse.clone());
        Ok(())
    }

    fn update(&self, warehouse: &Warehouse) -> DomainResult<()> {
        *self.writes.lock().unwrap() += 1;
        self.rows
            .lock()
            .unwrap()
            .insert(warehouse.business_unit_code.clone(), warehouse.clone());
        Ok(())
    }

    fn remove(&self, warehouse: &Warehouse) -> DomainResult<()> {
        *self.writes.lock().unwrap() += 1;
        self.rows.lock().unwrap().remove(&warehouse.business_unit_code);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct FakeLocations(HashMap<LocationId, Location>);

impl FakeLocations {
    pub fn with(id: &str, max_warehouses: u32, max_capacity: u32) -> Self {
        let mut map = HashMap::new();
        map.insert(
            loc(id),
            Location::new(loc(id), max_warehouses, max_capacity).unwrap(),
        );
        Self(map)
    }
}

impl LocationResolver for FakeLocations {
    fn resolve_by_identifier(&self, identifier: &LocationId) -> DomainResult<Location> {
        self.0
            .get(identifier)
            .cloned()
            .ok_or_else(|| DomainError::invalid_reference(format!("location not found: {identifier}")))
    }
}
