//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// A warehouse keeps its identity across replacement and archival; only the
/// fields around the identity change.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
