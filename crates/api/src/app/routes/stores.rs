use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use fulfilment_core::DomainError;
use fulfilment_stores::StoreId;

use crate::app::dto::{StoreRequest, StoreResponse};
use crate::app::errors;
use crate::app::routes::common::parse_id;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_stores).post(create_store))
        .route(
            "/:id",
            get(get_store)
                .put(replace_store)
                .patch(patch_store)
                .delete(delete_store),
        )
}

fn store_id(raw: &str) -> Result<StoreId, DomainError> {
    parse_id(raw, "Store").map(StoreId)
}

fn respond(result: Result<fulfilment_stores::Store, DomainError>) -> axum::response::Response {
    match result {
        Ok(s) => Json(StoreResponse::from(s)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_stores(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.stores.list() {
        Ok(all) => Json(all.into_iter().map(StoreResponse::from).collect::<Vec<_>>())
            .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_store(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    respond(store_id(&id).and_then(|id| services.stores.get(id)))
}

pub async fn create_store(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<StoreRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match body
        .into_new_draft()
        .and_then(|draft| services.stores.create(draft))
    {
        Ok(s) => (StatusCode::CREATED, Json(StoreResponse::from(s))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn replace_store(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<StoreRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    respond(body.into_draft().and_then(|draft| {
        let id = store_id(&id)?;
        services.stores.replace(id, draft)
    }))
}

pub async fn patch_store(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<StoreRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    respond(store_id(&id).and_then(|id| services.stores.patch(id, body.into_patch())))
}

pub async fn delete_store(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match store_id(&id).and_then(|id| services.stores.delete(id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
