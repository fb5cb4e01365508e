//! Demo data for local runs.
//!
//! Warehouse rows are written straight into the store, bypassing admission:
//! `MWH.001` exceeds its location's capacity ceiling on purpose, as legacy data
//! would.

use chrono::Utc;
use tracing::info;

use fulfilment_core::{BusinessUnitCode, DomainResult, LocationId};
use fulfilment_products::{ProductDraft, ProductRepository};
use fulfilment_stores::{StoreDraft, StoreRepository};
use fulfilment_warehouses::{Warehouse, WarehouseStore};

/// `(code, location, capacity, stock)`
const DEMO_WAREHOUSES: &[(&str, &str, u32, u32)] = &[
    ("MWH.001", "ZWOLLE-001", 100, 10),
    ("MWH.012", "AMSTERDAM-001", 50, 5),
    ("MWH.023", "TILBURG-001", 30, 27),
];

/// `(name, stock)`, shared by the product catalog and the store directory.
const DEMO_ITEMS: &[(&str, u32)] = &[("TONSTAD", 10), ("KALLAX", 5), ("BESTÅ", 3)];

/// Insert the demo warehouses that are not stored yet. Returns how many were added.
pub fn seed_demo_warehouses<S: WarehouseStore>(store: &S) -> DomainResult<usize> {
    let now = Utc::now();
    let mut added = 0;

    for &(code, location, capacity, stock) in DEMO_WAREHOUSES {
        let code = BusinessUnitCode::new(code)?;
        if store.find_by_business_unit_code(&code)?.is_some() {
            continue;
        }
        let mut warehouse = Warehouse::new(code, LocationId::new(location)?, capacity, stock);
        warehouse.created_at = Some(now);
        store.create(&warehouse)?;
        added += 1;
    }

    info!(added, "demo warehouses seeded");
    Ok(added)
}

/// Seed the demo products into an empty repository (ids 1..=3).
pub fn seed_demo_products<R: ProductRepository>(repository: &R) -> DomainResult<usize> {
    if !repository.list()?.is_empty() {
        return Ok(0);
    }
    for &(name, stock) in DEMO_ITEMS {
        let mut draft = ProductDraft::new(name);
        draft.stock = stock;
        repository.insert(&draft)?;
    }
    info!(added = DEMO_ITEMS.len(), "demo products seeded");
    Ok(DEMO_ITEMS.len())
}

/// Seed the demo stores into an empty repository (ids 1..=3).
pub fn seed_demo_stores<R: StoreRepository>(repository: &R) -> DomainResult<usize> {
    if !repository.list()?.is_empty() {
        return Ok(0);
    }
    for &(name, quantity) in DEMO_ITEMS {
        repository.insert(&StoreDraft::new(name, quantity))?;
    }
    info!(added = DEMO_ITEMS.len(), "demo stores seeded");
    Ok(DEMO_ITEMS.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{InMemoryProductRepository, InMemoryStoreRepository, InMemoryWarehouseStore};
    use fulfilment_core::{DomainError, ErrorKind};
    use fulfilment_products::ProductId;
    use fulfilment_stores::StoreId;
    use fulfilment_warehouses::MockWarehouseStore;

    #[test]
    fn seeding_is_repeatable() {
        let store = InMemoryWarehouseStore::new();
        assert_eq!(seed_demo_warehouses(&store).unwrap(), 3);
        assert_eq!(seed_demo_warehouses(&store).unwrap(), 0);

        let all = store.get_all().unwrap();
        assert_eq!(all.len(), 3);
        assert!(all.iter().all(|w| w.created_at.is_some() && w.is_active()));
    }

    #[test]
    fn present_warehouses_are_never_rewritten() {
        let mut store = MockWarehouseStore::new();
        store.expect_find_by_business_unit_code().times(3).returning(|code| {
            Ok(Some(Warehouse::new(
                code.clone(),
                LocationId::new("ZWOLLE-001").unwrap(),
                1,
                0,
            )))
        });
        store.expect_create().never();

        assert_eq!(seed_demo_warehouses(&store).unwrap(), 0);
    }

    #[test]
    fn storage_failure_stops_seeding() {
        let mut store = MockWarehouseStore::new();
        store.expect_find_by_business_unit_code().returning(|_| Ok(None));
        store
            .expect_create()
            .times(1)
            .returning(|_| Err(DomainError::storage("disk full")));

        let err = seed_demo_warehouses(&store).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Storage);
    }

    #[test]
    fn products_and_stores_are_seeded_once() {
        let products = InMemoryProductRepository::new();
        assert_eq!(seed_demo_products(&products).unwrap(), 3);
        assert_eq!(seed_demo_products(&products).unwrap(), 0);
        assert_eq!(products.find(ProductId(1)).unwrap().unwrap().name, "TONSTAD");

        let stores = InMemoryStoreRepository::new();
        assert_eq!(seed_demo_stores(&stores).unwrap(), 3);
        assert_eq!(seed_demo_stores(&stores).unwrap(), 0);
        let kallax = stores.find(StoreId(2)).unwrap().unwrap();
        assert_eq!(kallax.name, "KALLAX");
        assert_eq!(kallax.quantity_products_in_stock, 5);
    }
}
