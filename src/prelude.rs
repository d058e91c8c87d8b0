// SPDX-License-Identifier: MIT

//! Prelude module for convenient imports
//!
//! ```rust
//! use service_scaffold::prelude::*;
//! ```

pub use crate::api::{AppState, create_router};
pub use crate::config::Config;
pub use crate::error::{AppError, Result};
