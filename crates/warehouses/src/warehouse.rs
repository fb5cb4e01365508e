use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use fulfilment_core::{BusinessUnitCode, Entity, LocationId};

/// A fulfilment unit identified by its business-unit code.
///
/// `created_at` is absent until the creation rule admits the warehouse.
/// `archived_at` absent means the warehouse is active; once set it is terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warehouse {
    pub business_unit_code: BusinessUnitCode,
    pub location: LocationId,
    pub capacity: u32,
    pub stock: u32,
    pub created_at: Option<DateTime<Utc>>,
    pub archived_at: Option<DateTime<Utc>>,
}

impl Warehouse {
    /// A not-yet-admitted descriptor (no timestamps).
    pub fn new(
        business_unit_code: BusinessUnitCode,
        location: LocationId,
        capacity: u32,
        stock: u32,
    ) -> Self {
        Self {
            business_unit_code,
            location,
            capacity,
            stock,
            created_at: None,
            archived_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.archived_at.is_none()
    }

    /// Whether this warehouse counts towards the density ceiling of `location`.
    pub fn occupies(&self, location: &LocationId) -> bool {
        self.is_active() && &self.location == location
    }
}

impl Entity for Warehouse {
    type Id = BusinessUnitCode;

    fn id(&self) -> &Self::Id {
        &self.business_unit_code
    }
}
