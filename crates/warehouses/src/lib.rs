//! Warehouse domain module.
//!
//! This crate contains the admission and mutation rules for warehouses,
//! implemented as synchronous domain logic over two injected ports
//! (`WarehouseStore`, `LocationResolver`). No IO, no HTTP, no storage lives here.

pub mod location;
pub mod locks;
pub mod ports;
pub mod usecases;
pub mod warehouse;

#[cfg(test)]
mod test_support;

pub use location::Location;
pub use locks::LocationLocks;
pub use ports::{
    ArchiveWarehouseOperation, CreateWarehouseOperation, LocationResolver,
    ReplaceWarehouseOperation, WarehouseStore,
};
#[cfg(any(test, feature = "testing"))]
pub use ports::{MockLocationResolver, MockWarehouseStore};
pub use usecases::{ArchiveWarehouseUseCase, CreateWarehouseUseCase, ReplaceWarehouseUseCase};
pub use warehouse::Warehouse;
