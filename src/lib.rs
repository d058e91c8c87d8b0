// SPDX-License-Identifier: MIT

//! # Service Scaffold
//!
//! Minimal HTTP service skeleton: a greeting endpoint, liveness and
//! readiness probes, and a permissive CORS policy for development.
//!
//! ## Main modules
//! - `api`: HTTP router, handlers and shared state
//! - `config`: configuration management
//! - `error`: error types
//! - `prelude`: commonly used types
//! - `server`: listener setup, including inherited sockets

mod api;
mod config;
mod error;
pub mod prelude;
mod server;

// Re-export commonly used types
/// Application configuration
pub use config::Config;

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router and state
pub use api::{AppState, create_router};

/// Listener setup
pub use server::bind_listener;

/// Inherited socket source accepted by [`bind_listener`]
pub use listenfd::ListenFd;

/// Response bodies
pub use api::handlers::{HealthResponse, ReadyResponse, RootResponse};
