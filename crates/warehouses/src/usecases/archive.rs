use tracing::info;

use fulfilment_core::{Clock, DomainResult, SystemClock};

use crate::ports::{ArchiveWarehouseOperation, WarehouseStore};
use crate::warehouse::Warehouse;

/// Archival rule: stamps `archived_at` on an in-hand record and persists it.
///
/// The caller resolves the record first; no existence check happens here.
pub struct ArchiveWarehouseUseCase<S, C = SystemClock> {
    store: S,
    clock: C,
}

impl<S> ArchiveWarehouseUseCase<S, SystemClock>
where
    S: WarehouseStore,
{
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S, C> ArchiveWarehouseUseCase<S, C>
where
    S: WarehouseStore,
    C: Clock,
{
    pub fn with_clock(store: S, clock: C) -> Self {
        Self { store, clock }
    }
}

impl<S, C> ArchiveWarehouseOperation for ArchiveWarehouseUseCase<S, C>
where
    S: WarehouseStore,
    C: Clock,
{
    #[tracing::instrument(
        name = "warehouse.archive",
        skip_all,
        fields(business_unit_code = %warehouse.business_unit_code)
    )]
    fn archive(&self, mut warehouse: Warehouse) -> DomainResult<Warehouse> {
        warehouse.archived_at = Some(self.clock.now());
        self.store.update(&warehouse)?;
        info!(location = %warehouse.location, "warehouse archived");
        Ok(warehouse)
    }
}
