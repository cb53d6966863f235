//! HTTP application wiring (Axum router).
//!
//! Layout:
//! - `routes/`: HTTP routes + handlers
//! - `errors.rs`: consistent error responses
//!
//! The engine itself lives in `pricelens-suggestions`; this layer only maps
//! JSON bodies in and out and owns transport concerns (status codes, CORS).

use axum::Router;
use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};

pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// CORS is permissive because browser-side store dashboards call this API
/// directly.
pub fn build_app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    routes::router().layer(cors)
}
