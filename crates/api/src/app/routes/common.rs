//! Shared handler helpers.

use fulfilment_core::DomainError;

/// Numeric path ids. Anything that is not one cannot name a stored row.
pub fn parse_id(raw: &str, entity: &str) -> Result<u64, DomainError> {
    raw.parse()
        .map_err(|_| DomainError::not_found(format!("{entity} with id of {raw} does not exist.")))
}
