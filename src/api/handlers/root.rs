// SPDX-License-Identifier: MIT

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::state::AppState;

/// Root endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// GET /
///
/// Static greeting naming the project.
pub async fn root(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let response = RootResponse {
        message: format!("Welcome to {}", state.config.project_name),
    };

    (StatusCode::OK, Json(response))
}
