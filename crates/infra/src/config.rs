//! Configuration loading and representation.
//!
//! Read from the process environment:
//! - `FULFILMENT_BIND_ADDR`: listen address (default `0.0.0.0:8080`)
//! - `FULFILMENT_SEED_DEMO`: seed the demo warehouses (default `true`)

use std::net::SocketAddr;

use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "FULFILMENT_BIND_ADDR";
pub const SEED_DEMO_VAR: &str = "FULFILMENT_SEED_DEMO";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub seed_demo: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = lookup(BIND_ADDR_VAR)
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: BIND_ADDR_VAR,
                reason: e.to_string(),
            })?;

        let seed_demo = match lookup(SEED_DEMO_VAR) {
            None => true,
            Some(raw) => parse_bool(&raw).ok_or_else(|| ConfigError::Invalid {
                var: SEED_DEMO_VAR,
                reason: format!("expected a boolean, got {raw:?}"),
            })?,
        };

        Ok(Self {
            bind_addr,
            seed_demo,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
