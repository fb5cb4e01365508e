use tracing::{debug, info};

use fulfilment_core::{DomainError, DomainResult};

use crate::ports::{ReplaceWarehouseOperation, WarehouseStore};
use crate::warehouse::Warehouse;

/// Replacement rule: swaps the location/capacity of an existing warehouse while
/// its stock carries over unchanged.
///
/// The replacement is checked against the *persisted* record, not against its
/// own declared fields. Location ceilings are not re-run here, and an archived
/// record is replaced like an active one.
pub struct ReplaceWarehouseUseCase<S> {
    store: S,
}

impl<S> ReplaceWarehouseUseCase<S>
where
    S: WarehouseStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn apply(&self, mut replacement: Warehouse) -> DomainResult<Warehouse> {
        let current = self
            .store
            .find_by_business_unit_code(&replacement.business_unit_code)?
            .ok_or_else(|| DomainError::not_found("warehouse not found"))?;

        if replacement.capacity < current.stock {
            return Err(DomainError::invalid_state(
                "new capacity cannot accommodate current stock",
            ));
        }

        if replacement.stock != current.stock {
            return Err(DomainError::invalid_state(
                "replacement stock must match current stock",
            ));
        }

        replacement.business_unit_code = current.business_unit_code;
        replacement.created_at = current.created_at;
        self.store.update(&replacement)?;
        Ok(replacement)
    }
}

impl<S> ReplaceWarehouseOperation for ReplaceWarehouseUseCase<S>
where
    S: WarehouseStore,
{
    #[tracing::instrument(
        name = "warehouse.replace",
        skip_all,
        fields(business_unit_code = %replacement.business_unit_code, location = %replacement.location)
    )]
    fn replace(&self, replacement: Warehouse) -> DomainResult<Warehouse> {
        match self.apply(replacement) {
            Ok(replaced) => {
                info!(capacity = replaced.capacity, "warehouse replaced");
                Ok(replaced)
            }
            Err(err) => {
                debug!(kind = ?err.kind(), reason = err.message(), "warehouse replacement rejected");
                Err(err)
            }
        }
    }
}
