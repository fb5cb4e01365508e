use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use fulfilment_core::{DomainError, ErrorKind};

/// Map a rule failure to its HTTP status. Every kind keeps its own error code.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    let (status, code) = match err.kind() {
        ErrorKind::Conflict => (StatusCode::CONFLICT, "conflict"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "not_found"),
        ErrorKind::InvalidReference => (StatusCode::BAD_REQUEST, "location_not_found"),
        ErrorKind::CapacityExceeded => (StatusCode::BAD_REQUEST, "capacity_exceeded"),
        ErrorKind::InvalidState => (StatusCode::BAD_REQUEST, "invalid_state"),
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "validation_error"),
        ErrorKind::Unprocessable => (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable_entity"),
        ErrorKind::Storage => (StatusCode::INTERNAL_SERVER_ERROR, "storage_error"),
    };
    if status.is_server_error() {
        tracing::error!(error = %err, "request failed");
    }
    json_error(status, code, err.message().to_string())
}

/// Body that failed to parse (syntax, missing field, out-of-range number).
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    json_error(StatusCode::BAD_REQUEST, "validation_error", rejection.body_text())
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
