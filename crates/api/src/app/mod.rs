//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: adapter and rule wiring
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs and mapping to/from domain types
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: Arc<AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
        .layer(axum::middleware::from_fn(middleware::request_span))
}
