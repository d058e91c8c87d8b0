// SPDX-License-Identifier: MIT

//! HTTP API module
//!
//! # Endpoints
//! - `GET /` — greeting
//! - `GET /health/` — liveness probe with uptime
//! - `GET /health/ready` — readiness probe

pub mod handlers;
pub mod state;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use state::AppState;

/// Path prefix the health routes are mounted under
pub const HEALTH_PREFIX: &str = "/health";

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .merge(health_router())
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness and readiness routes under [`HEALTH_PREFIX`]
///
/// The bare prefix is served alongside the trailing-slash form.
fn health_router() -> Router<Arc<AppState>> {
    Router::new()
        .route(HEALTH_PREFIX, get(handlers::health_check))
        .route(&format!("{HEALTH_PREFIX}/"), get(handlers::health_check))
        .route(&format!("{HEALTH_PREFIX}/ready"), get(handlers::readiness))
}

/// Allows any origin, method and header, with credentials.
///
/// Origin, method and headers are mirrored from the request since a literal
/// `*` is not allowed alongside credentials. Harden before production.
fn cors_layer() -> CorsLayer {
    CorsLayer::very_permissive()
}
