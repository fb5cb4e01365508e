use axum::Router;

pub mod common;
pub mod products;
pub mod stores;
pub mod system;
pub mod warehouses;

/// Router for all resource endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/warehouse", warehouses::router())
        .nest("/product", products::router())
        .nest("/store", stores::router())
}
