//! Product catalog module.
//!
//! Plain CRUD over a `ProductRepository` port: the only rules are that a product
//! carries a name and that reads/writes target an existing id.

pub mod catalog;
pub mod ports;
pub mod product;

pub use catalog::ProductCatalog;
pub use ports::ProductRepository;
pub use product::{Product, ProductDraft, ProductId};
