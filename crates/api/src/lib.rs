//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes for the audit workflow
//! - Caller-identity extraction
//! - JSON error mapping

pub mod middleware;
pub mod routes;

use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use auditra_core::{AuditEngine, MemoryStore};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The audit workflow engine.
    pub engine: Arc<AuditEngine<MemoryStore>>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
