use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use pricelens_core::DomainError;

/// Map a domain error to its HTTP response: validation failures are the
/// caller's fault, anything else is ours.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, msg),
        DomainError::Internal(msg) => json_error(StatusCode::INTERNAL_SERVER_ERROR, msg),
    }
}

/// The error envelope is a single `{ "error": string }` object, so callers
/// can distinguish it from the success array by shape.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, axum::Json(json!({ "error": message.into() }))).into_response()
}
