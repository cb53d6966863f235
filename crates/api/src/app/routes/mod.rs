use axum::Router;
use axum::routing::{get, post};

pub mod suggestions;
pub mod system;

pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/pricing-suggestions", post(suggestions::pricing_suggestions))
}
