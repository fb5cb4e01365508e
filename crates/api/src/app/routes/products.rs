use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use fulfilment_products::ProductId;

use crate::app::dto::{ProductRequest, ProductResponse};
use crate::app::errors;
use crate::app::routes::common::parse_id;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

fn product_id(raw: &str) -> Result<ProductId, fulfilment_core::DomainError> {
    parse_id(raw, "Product").map(ProductId)
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.products.list() {
        Ok(all) => Json(
            all.into_iter()
                .map(ProductResponse::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match product_id(&id).and_then(|id| services.products.get(id)) {
        Ok(p) => Json(ProductResponse::from(p)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    match body
        .into_new_draft()
        .and_then(|draft| services.products.create(draft))
    {
        Ok(p) => (StatusCode::CREATED, Json(ProductResponse::from(p))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Result<Json<ProductRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let result = body.into_draft().and_then(|draft| {
        let id = product_id(&id)?;
        services.products.update(id, draft)
    });

    match result {
        Ok(p) => Json(ProductResponse::from(p)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match product_id(&id).and_then(|id| services.products.delete(id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
