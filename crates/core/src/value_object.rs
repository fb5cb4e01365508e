//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have **no identity**: two values with the same attributes are
/// equal. Location reference data is modelled this way, since the rule engine
/// only ever reads it and never tracks it across changes.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Ceiling {
///     max_capacity: u32,
/// }
///
/// impl ValueObject for Ceiling {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
