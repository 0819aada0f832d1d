//! HTTP surface of the SEO AI Engine: a single liveness route.

pub mod app_state;
pub mod config;
pub mod error;
pub mod routes;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{app_state::AppState, routes::health::health};

/// Assembles the router. Unknown paths and methods fall through to axum's
/// default 404 and 405 responses.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
