//! Ports consumed and exposed by the warehouse rules.
//!
//! All calls are synchronous and are assumed to reflect a consistent snapshot at
//! call time. Ordering and atomicity across calls belong to the adapter.

use std::sync::Arc;

use fulfilment_core::{BusinessUnitCode, DomainResult, LocationId};

use crate::location::Location;
use crate::warehouse::Warehouse;

/// Persistent storage of warehouse records.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait WarehouseStore: Send + Sync {
    /// Every record, active and archived.
    fn get_all(&self) -> DomainResult<Vec<Warehouse>>;
    fn find_by_business_unit_code(
        &self,
        code: &BusinessUnitCode,
    ) -> DomainResult<Option<Warehouse>>;
    fn create(&self, warehouse: &Warehouse) -> DomainResult<()>;
    fn update(&self, warehouse: &Warehouse) -> DomainResult<()>;
    /// Physical delete. The rules never call this.
    fn remove(&self, warehouse: &Warehouse) -> DomainResult<()>;
}

/// Location reference data lookup.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait LocationResolver: Send + Sync {
    /// Fails with `DomainError::InvalidReference` for an unknown identifier.
    fn resolve_by_identifier(&self, identifier: &LocationId) -> DomainResult<Location>;
}

/// Admits a new warehouse.
pub trait CreateWarehouseOperation: Send + Sync {
    fn create(&self, warehouse: Warehouse) -> DomainResult<Warehouse>;
}

/// Replaces the fields of an existing warehouse sharing the same code.
pub trait ReplaceWarehouseOperation: Send + Sync {
    fn replace(&self, replacement: Warehouse) -> DomainResult<Warehouse>;
}

/// Soft-deletes an in-hand warehouse.
pub trait ArchiveWarehouseOperation: Send + Sync {
    fn archive(&self, warehouse: Warehouse) -> DomainResult<Warehouse>;
}

impl<S> WarehouseStore for Arc<S>
where
    S: WarehouseStore + ?Sized,
{
    fn get_all(&self) -> DomainResult<Vec<Warehouse>> {
        (**self).get_all()
    }

    fn find_by_business_unit_code(
        &self,
        code: &BusinessUnitCode,
    ) -> DomainResult<Option<Warehouse>> {
        (**self).find_by_business_unit_code(code)
    }

    fn create(&self, warehouse: &Warehouse) -> DomainResult<()> {
        (**self).create(warehouse)
    }

    fn update(&self, warehouse: &Warehouse) -> DomainResult<()> {
        (**self).update(warehouse)
    }

    fn remove(&self, warehouse: &Warehouse) -> DomainResult<()> {
        (**self).remove(warehouse)
    }
}

impl<R> LocationResolver for Arc<R>
where
    R: LocationResolver + ?Sized,
{
    fn resolve_by_identifier(&self, identifier: &LocationId) -> DomainResult<Location> {
        (**self).resolve_by_identifier(identifier)
    }
}

impl<S> WarehouseStore for &S
where
    S: WarehouseStore + ?Sized,
{
    fn get_all(&self) -> DomainResult<Vec<Warehouse>> {
        (**self).get_all()
    }

    fn find_by_business_unit_code(
        &self,
        code: &BusinessUnitCode,
    ) -> DomainResult<Option<Warehouse>> {
        (**self).find_by_business_unit_code(code)
    }

    fn create(&self, warehouse: &Warehouse) -> DomainResult<()> {
        (**self).create(warehouse)
    }

    fn update(&self, warehouse: &Warehouse) -> DomainResult<()> {
        (**self).update(warehouse)
    }

    fn remove(&self, warehouse: &Warehouse) -> DomainResult<()> {
        (**self).remove(warehouse)
    }
}
