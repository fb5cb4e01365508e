use serde::{Deserialize, Serialize};

use fulfilment_core::{DomainError, DomainResult, LocationId, ValueObject};

/// Read-only constraints of a physical site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub identification: LocationId,
    /// Density ceiling: simultaneously active warehouses allowed here.
    pub max_number_of_warehouses: u32,
    /// Ceiling on any single warehouse's capacity here.
    pub max_capacity: u32,
}

impl Location {
    pub fn new(
        identification: LocationId,
        max_number_of_warehouses: u32,
        max_capacity: u32,
    ) -> DomainResult<Self> {
        if max_number_of_warehouses == 0 {
            return Err(DomainError::validation(format!(
                "location {identification} must allow at least one warehouse"
            )));
        }
        Ok(Self {
            identification,
            max_number_of_warehouses,
            max_capacity,
        })
    }

    /// Whether `active` warehouses already fill the density ceiling.
    pub fn is_full(&self, active: usize) -> bool {
        active >= self.max_number_of_warehouses as usize
    }
}

impl ValueObject for Location {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_density_ceiling() {
        let err = Location::new(LocationId::new("X").unwrap(), 0, 10).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn full_at_ceiling() {
        let loc = Location::new(LocationId::new("ZWOLLE-002").unwrap(), 2, 50).unwrap();
        assert!(!loc.is_full(1));
        assert!(loc.is_full(2));
        assert!(loc.is_full(3));
    }
}
