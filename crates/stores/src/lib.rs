//! Retail store module: CRUD plus partial update over a `StoreRepository` port.

pub mod directory;
pub mod ports;
pub mod store;

pub use directory::StoreDirectory;
pub use ports::StoreRepository;
pub use store::{Store, StoreDraft, StoreId, StorePatch};
