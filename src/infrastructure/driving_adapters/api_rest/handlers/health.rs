//! Health Handler
//!
//! Liveness probe. Never touches the metadata endpoint.

use axum::{routing::get, Router};

use crate::infrastructure::driving_adapters::api_rest::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// GET /health
async fn health() -> &'static str {
    "OK"
}
