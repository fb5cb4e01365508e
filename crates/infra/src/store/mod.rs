//! In-memory storage adapters for every port.

pub mod in_memory;
pub mod products;
mod sequenced;
pub mod stores;

pub use in_memory::InMemoryWarehouseStore;
pub use products::InMemoryProductRepository;
pub use stores::InMemoryStoreRepository;
