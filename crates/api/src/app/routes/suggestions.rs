use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::app::errors;

/// `POST /pricing-suggestions`
///
/// Body: `{ our_data, competitor_stores_data, product_limit? }`. A
/// structurally valid request always yields 200 with the suggestion group
/// array (possibly empty); structural problems yield 400 with the
/// `{ "error": ... }` envelope.
///
/// The body is taken as a raw JSON value so the engine's own validation can
/// produce the descriptive messages; axum's typed rejection would bypass the
/// error envelope.
pub async fn pricing_suggestions(Json(body): Json<serde_json::Value>) -> axum::response::Response {
    match pricelens_suggestions::handle_request(body) {
        Ok(groups) => {
            tracing::info!(groups = groups.len(), "pricing suggestions computed");
            (StatusCode::OK, Json(groups)).into_response()
        }
        Err(err) => {
            tracing::info!(error = %err, "pricing suggestions rejected");
            errors::domain_error_to_response(err)
        }
    }
}
