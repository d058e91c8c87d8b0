// SPDX-License-Identifier: MIT

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::state::AppState;

/// Liveness endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Seconds since process start
    pub uptime: f64,
}

/// Readiness endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadyResponse {
    pub ready: bool,
}

/// GET /health/
///
/// Liveness probe. Always reports "healthy" along with the process uptime.
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        uptime: state.uptime().as_secs_f64(),
    };

    (StatusCode::OK, Json(response))
}

/// GET /health/ready
///
/// Readiness probe. There is nothing to wait on, so it is always ready.
pub async fn readiness() -> impl IntoResponse {
    (StatusCode::OK, Json(ReadyResponse { ready: true }))
}
