// SPDX-License-Identifier: MIT

//! Configuration module
//!
//! Loads the listening port and project display name from environment
//! variables, falling back to values fixed at build time.

use std::env::VarError;
use std::net::{IpAddr, SocketAddr};

use crate::error::{AppError, Result};


/// Default configuration values
pub mod defaults {
    use std::net::{IpAddr, Ipv4Addr};

    /// Interface the server binds to (all interfaces)
    pub const HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

    /// Port used when `PORT` is unset. Overridable at build time with `DEFAULT_PORT`.
    pub const PORT: &str = match option_env!("DEFAULT_PORT") {
        Some(port) => port,
        None => "8000",
    };

    /// Display name used when `PROJECT_NAME` is unset. Overridable at build time.
    pub const PROJECT_NAME: &str = match option_env!("PROJECT_NAME") {
        Some(name) => name,
        None => env!("CARGO_PKG_NAME"),
    };
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const PROJECT_NAME: &str = "PROJECT_NAME";
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub project_name: String,
}

impl Config {
    /// Loads configuration from the process environment (and `.env`, if present)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        // Read eagerly so a non-UTF-8 value fails instead of looking unset
        let port = optional_var(env_vars::PORT, std::env::var(env_vars::PORT))?;
        let project_name =
            optional_var(env_vars::PROJECT_NAME, std::env::var(env_vars::PROJECT_NAME))?;

        Self::from_lookup(|key| match key {
            env_vars::PORT => port.clone(),
            env_vars::PROJECT_NAME => project_name.clone(),
            _ => None,
        })
    }

    /// Builds configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = defaults::HOST;

        let port = match lookup(env_vars::PORT) {
            Some(value) => parse_port(env_vars::PORT, &value)?,
            None => parse_port("DEFAULT_PORT", defaults::PORT)?,
        };

        let project_name = match lookup(env_vars::PROJECT_NAME) {
            Some(name) if name.trim().is_empty() => {
                return Err(AppError::Config(format!(
                    "{} cannot be empty",
                    env_vars::PROJECT_NAME
                )));
            }
            Some(name) => name,
            None => defaults::PROJECT_NAME.to_string(),
        };

        Ok(Config {
            host,
            port,
            project_name,
        })
    }

    /// Socket address the server listens on
    pub fn server_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Maps an environment lookup to `None` when unset, rejecting non-UTF-8 values
fn optional_var(
    name: &str,
    value: std::result::Result<String, VarError>,
) -> Result<Option<String>> {
    match value {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(AppError::Config(format!(
            "{name} is not valid UTF-8: {raw:?}"
        ))),
    }
}

fn parse_port(name: &str, value: &str) -> Result<u16> {
    value.trim().parse::<u16>().map_err(|e| {
        AppError::Config(format!(
            "{name} must be an integer between 0 and 65535, got '{value}': {e}"
        ))
    })
}
