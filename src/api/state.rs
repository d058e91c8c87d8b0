// SPDX-License-Identifier: MIT

//! Application state shared across HTTP handlers

use std::time::{Duration, Instant};

use crate::config::Config;

/// Shared application state
///
/// Built once at startup and handed to every handler behind an `Arc`;
/// nothing in it is mutated afterwards.
pub struct AppState {
    pub config: Config,
    pub started_at: Instant,
}

impl AppState {
    /// Creates state, recording the current instant as the process start time
    pub fn new(config: Config) -> Self {
        Self {
            config,
            started_at: Instant::now(),
        }
    }

    /// Time elapsed since the state was created
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
