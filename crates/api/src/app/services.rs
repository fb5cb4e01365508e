//! Infrastructure wiring: adapters behind the ports, rules behind the operations.

use std::sync::Arc;

use fulfilment_core::DomainResult;
use fulfilment_infra::{
    seed_demo_products, seed_demo_stores, seed_demo_warehouses, InMemoryProductRepository,
    InMemoryStoreRepository, InMemoryWarehouseStore, StaticLocationGateway,
};
use fulfilment_products::{ProductCatalog, ProductRepository};
use fulfilment_stores::{StoreDirectory, StoreRepository};
use fulfilment_warehouses::{
    ArchiveWarehouseOperation, ArchiveWarehouseUseCase, CreateWarehouseOperation,
    CreateWarehouseUseCase, ReplaceWarehouseOperation, ReplaceWarehouseUseCase, WarehouseStore,
};

pub type SharedProductCatalog = ProductCatalog<Arc<dyn ProductRepository>>;
pub type SharedStoreDirectory = StoreDirectory<Arc<dyn StoreRepository>>;

/// Everything the handlers need, type-erased behind the port/operation traits.
#[derive(Clone)]
pub struct AppServices {
    pub store: Arc<dyn WarehouseStore>,
    pub create: Arc<dyn CreateWarehouseOperation>,
    pub replace: Arc<dyn ReplaceWarehouseOperation>,
    pub archive: Arc<dyn ArchiveWarehouseOperation>,
    pub products: Arc<SharedProductCatalog>,
    pub stores: Arc<SharedStoreDirectory>,
}

impl AppServices {
    /// In-memory repositories + static location table (dev/test).
    pub fn in_memory(seed_demo: bool) -> DomainResult<Self> {
        let store: Arc<dyn WarehouseStore> = Arc::new(InMemoryWarehouseStore::new());
        let products: Arc<dyn ProductRepository> = Arc::new(InMemoryProductRepository::new());
        let stores: Arc<dyn StoreRepository> = Arc::new(InMemoryStoreRepository::new());
        if seed_demo {
            seed_demo_warehouses(&store)?;
            seed_demo_products(&products)?;
            seed_demo_stores(&stores)?;
        }
        let locations = StaticLocationGateway::new()?;
        Ok(Self::from_parts(store, locations, products, stores))
    }

    pub fn from_parts(
        store: Arc<dyn WarehouseStore>,
        locations: StaticLocationGateway,
        products: Arc<dyn ProductRepository>,
        stores: Arc<dyn StoreRepository>,
    ) -> Self {
        Self {
            create: Arc::new(CreateWarehouseUseCase::new(store.clone(), locations)),
            replace: Arc::new(ReplaceWarehouseUseCase::new(store.clone())),
            archive: Arc::new(ArchiveWarehouseUseCase::new(store.clone())),
            store,
            products: Arc::new(ProductCatalog::new(products)),
            stores: Arc::new(StoreDirectory::new(stores)),
        }
    }
}
