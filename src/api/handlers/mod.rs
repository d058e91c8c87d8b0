// SPDX-License-Identifier: MIT

mod health;
mod root;

pub use health::{HealthResponse, ReadyResponse, health_check, readiness};
pub use root::{RootResponse, root};
