//! Infrastructure layer: storage and reference-data adapters, demo seeds, config.

pub mod config;
pub mod location_gateway;
pub mod seed;
pub mod store;

pub use config::{AppConfig, ConfigError};
pub use location_gateway::StaticLocationGateway;
pub use seed::{seed_demo_products, seed_demo_stores, seed_demo_warehouses};
pub use store::{InMemoryProductRepository, InMemoryStoreRepository, InMemoryWarehouseStore};
