//! REST API Module
//!
//! Contains HTTP handlers, DTOs, and middleware for the REST API.

pub mod dto;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::application::use_cases::instance::GetInstanceSummaryUseCase;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub get_instance_summary_use_case: Arc<GetInstanceSummaryUseCase>,
}

/// Build the full application router with middleware applied
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(handlers::instance::router())
        .merge(handlers::health::router())
        .fallback(handlers::instance::fallback)
        .layer(axum::middleware::from_fn(middleware::request_id::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
