use std::sync::Arc;

use tracing::{debug, info};

use fulfilment_core::{Clock, DomainError, DomainResult, SystemClock};

use crate::locks::{self, LocationLocks};
use crate::ports::{CreateWarehouseOperation, LocationResolver, WarehouseStore};
use crate::warehouse::Warehouse;

/// Admission rule for new warehouses.
///
/// Preconditions, in order:
/// 1. the business-unit code is unused (active or archived) → `Conflict`
/// 2. the location resolves → `InvalidReference` (from the resolver)
/// 3. the location has room for another active warehouse → `CapacityExceeded`
/// 4. the capacity fits the location's ceiling → `CapacityExceeded`
/// 5. the initial stock fits the declared capacity → `InvalidState`
///
/// Steps 3 through the final insert run under the location's admission lock.
pub struct CreateWarehouseUseCase<S, R, C = SystemClock> {
    store: S,
    locations: R,
    clock: C,
    locks: Arc<LocationLocks>,
}

impl<S, R> CreateWarehouseUseCase<S, R, SystemClock>
where
    S: WarehouseStore,
    R: LocationResolver,
{
    pub fn new(store: S, locations: R) -> Self {
        Self::with_clock(store, locations, SystemClock)
    }
}

impl<S, R, C> CreateWarehouseUseCase<S, R, C>
where
    S: WarehouseStore,
    R: LocationResolver,
    C: Clock,
{
    pub fn with_clock(store: S, locations: R, clock: C) -> Self {
        Self {
            store,
            locations,
            clock,
            locks: Arc::new(LocationLocks::new()),
        }
    }

    /// Share admission locks with other creation paths over the same store.
    pub fn with_locks(mut self, locks: Arc<LocationLocks>) -> Self {
        self.locks = locks;
        self
    }

    fn admit(&self, mut warehouse: Warehouse) -> DomainResult<Warehouse> {
        if self
            .store
            .find_by_business_unit_code(&warehouse.business_unit_code)?
            .is_some()
        {
            return Err(DomainError::conflict("business unit code already exists"));
        }

        let location = self.locations.resolve_by_identifier(&warehouse.location)?;

        let slot = self.locks.slot(&warehouse.location);
        let _admission = locks::acquire(&slot);

        let active = self
            .store
            .get_all()?
            .iter()
            .filter(|w| w.occupies(&warehouse.location))
            .count();
        if location.is_full(active) {
            return Err(DomainError::capacity_exceeded(
                "maximum number of warehouses reached for this location",
            ));
        }

        if warehouse.capacity > location.max_capacity {
            return Err(DomainError::capacity_exceeded(
                "warehouse capacity exceeds the location's maximum capacity",
            ));
        }

        if warehouse.stock > warehouse.capacity {
            return Err(DomainError::invalid_state(
                "stock informed exceeds the warehouse capacity",
            ));
        }

        warehouse.created_at = Some(self.clock.now());
        self.store.create(&warehouse)?;
        Ok(warehouse)
    }
}

impl<S, R, C> CreateWarehouseOperation for CreateWarehouseUseCase<S, R, C>
where
    S: WarehouseStore,
    R: LocationResolver,
    C: Clock,
{
    #[tracing::instrument(
        name = "warehouse.create",
        skip_all,
        fields(business_unit_code = %warehouse.business_unit_code, location = %warehouse.location)
    )]
    fn create(&self, warehouse: Warehouse) -> DomainResult<Warehouse> {
        match self.admit(warehouse) {
            Ok(created) => {
                info!(capacity = created.capacity, stock = created.stock, "warehouse created");
                Ok(created)
            }
            Err(err) => {
                debug!(kind = ?err.kind(), reason = err.message(), "warehouse creation rejected");
                Err(err)
            }
        }
    }
}
