//! Static location reference data.

use std::collections::HashMap;

use tracing::debug;

use fulfilment_core::{DomainError, DomainResult, LocationId};
use fulfilment_warehouses::{Location, LocationResolver};

/// `(identification, max number of warehouses, max capacity)`
const LOCATIONS: &[(&str, u32, u32)] = &[
    ("ZWOLLE-001", 1, 40),
    ("ZWOLLE-002", 2, 50),
    ("AMSTERDAM-001", 5, 100),
    ("AMSTERDAM-002", 3, 75),
    ("TILBURG-001", 1, 40),
    ("HELMOND-001", 1, 45),
    ("EINDHOVEN-001", 2, 70),
    ("VETSBY-001", 1, 90),
];

/// Resolves locations from a fixed in-process table.
#[derive(Debug, Clone)]
pub struct StaticLocationGateway {
    locations: HashMap<LocationId, Location>,
}

impl StaticLocationGateway {
    /// The built-in site table.
    pub fn new() -> DomainResult<Self> {
        let locations = LOCATIONS
            .iter()
            .map(|&(id, max_warehouses, max_capacity)| {
                Location::new(LocationId::new(id)?, max_warehouses, max_capacity)
            })
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self::from_locations(locations))
    }

    pub fn from_locations(locations: impl IntoIterator<Item = Location>) -> Self {
        Self {
            locations: locations
                .into_iter()
                .map(|l| (l.identification.clone(), l))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

impl LocationResolver for StaticLocationGateway {
    fn resolve_by_identifier(&self, identifier: &LocationId) -> DomainResult<Location> {
        match self.locations.get(identifier) {
            Some(location) => Ok(location.clone()),
            None => {
                debug!(location = %identifier, "unknown location");
                Err(DomainError::invalid_reference(format!(
                    "location not found: {identifier}"
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fulfilment_core::ErrorKind;

    #[test]
    fn resolves_existing_location() {
        let gateway = StaticLocationGateway::new().unwrap();
        let location = gateway
            .resolve_by_identifier(&LocationId::new("ZWOLLE-001").unwrap())
            .unwrap();

        assert_eq!(location.identification.as_str(), "ZWOLLE-001");
        assert_eq!(location.max_number_of_warehouses, 1);
        assert_eq!(location.max_capacity, 40);
        assert_eq!(gateway.len(), 8);
    }

    #[test]
    fn unknown_location_is_an_invalid_reference() {
        let gateway = StaticLocationGateway::new().unwrap();
        let err = gateway
            .resolve_by_identifier(&LocationId::new("NON-EXISTENT-999").unwrap())
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidReference);
        assert_eq!(err.message(), "location not found: NON-EXISTENT-999");
    }
}
