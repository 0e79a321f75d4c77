//! Process configuration, read from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "PNG_RESIZE_BIND_ADDR";
pub const SCRATCH_DIR_VAR: &str = "PNG_RESIZE_SCRATCH_DIR";
pub const MAX_PAYLOAD_VAR: &str = "PNG_RESIZE_MAX_PAYLOAD_BYTES";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_PAYLOAD_BYTES: usize = 6 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} is not a valid byte count: {value}")]
    InvalidSize { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Root for per-request staging directories. `None` means the OS temp dir.
    pub scratch_dir: Option<PathBuf>,
    /// Largest request body accepted by `/resize`.
    pub max_payload_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = addr.trim().parse().map_err(|_| ConfigError::InvalidAddr {
            var: BIND_ADDR_VAR,
            value: addr.clone(),
        })?;

        let scratch_dir = lookup(SCRATCH_DIR_VAR)
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        let max_payload_bytes = match lookup(MAX_PAYLOAD_VAR) {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::InvalidSize {
                        var: MAX_PAYLOAD_VAR,
                        value: raw,
                    })
                }
            },
            None => DEFAULT_MAX_PAYLOAD_BYTES,
        };

        Ok(Self {
            bind_addr,
            scratch_dir,
            max_payload_bytes,
        })
    }
}
