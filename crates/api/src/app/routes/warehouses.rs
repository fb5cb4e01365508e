use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use fulfilment_core::{BusinessUnitCode, DomainError};
use fulfilment_warehouses::{Warehouse, WarehouseStore};

use crate::app::dto::{WarehouseRequest, WarehouseResponse};
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_warehouses).post(create_warehouse))
        .route("/:code", get(get_warehouse).delete(archive_warehouse))
        .route("/:code/replacement", post(replace_warehouse))
}

pub async fn list_warehouses(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.store.get_all() {
        Ok(all) => Json(
            all.into_iter()
                .map(WarehouseResponse::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<WarehouseRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let result = body
        .into_domain()
        .and_then(|candidate| services.create.create(candidate));

    match result {
        Ok(created) => (StatusCode::CREATED, Json(WarehouseResponse::from(created))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
    Path(code): Path<String>,
) -> axum::response::Response {
    match find(&services, &code) {
        Ok(w) => Json(WarehouseResponse::from(w)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

/// Soft-delete. A warehouse that is already archived is left as is.
pub async fn archive_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
    Path(code): Path<String>,
) -> axum::response::Response {
    let result = find(&services, &code).and_then(|w| {
        if w.is_active() {
            services.archive.archive(w).map(|_| ())
        } else {
            Ok(())
        }
    });

    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn replace_warehouse(
    Extension(services): Extension<Arc<AppServices>>,
    Path(code): Path<String>,
    body: Result<Json<WarehouseRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };
    let result = BusinessUnitCode::new(code)
        .and_then(|code| body.into_domain_with_code(code))
        .and_then(|replacement| services.replace.replace(replacement));

    match result {
        Ok(replaced) => Json(WarehouseResponse::from(replaced)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

fn find(services: &AppServices, code: &str) -> Result<Warehouse, DomainError> {
    let code = BusinessUnitCode::new(code)?;
    services
        .store
        .find_by_business_unit_code(&code)?
        .ok_or_else(|| DomainError::not_found(format!("warehouse not found: {code}")))
}
