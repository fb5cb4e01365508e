//! Per-location admission locks.
//!
//! The density check reads the fleet, compares against the ceiling, then
//! inserts. Holding the location's lock across that sequence makes the ceiling
//! exact for every admission routed through the same `LocationLocks`.
//! Admissions at distinct locations never contend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use fulfilment_core::LocationId;

#[derive(Debug, Default)]
pub struct LocationLocks {
    slots: Mutex<HashMap<LocationId, Arc<Mutex<()>>>>,
}

impl LocationLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// The lock guarding admissions at `location`, created on first use.
    pub fn slot(&self, location: &LocationId) -> Arc<Mutex<()>> {
        // The map only ever grows, so a poisoned guard still holds a usable map.
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots
            .entry(location.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}

/// Acquire a slot, ignoring poison (the guarded value is `()`).
pub(crate) fn acquire(slot: &Mutex<()>) -> MutexGuard<'_, ()> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}
