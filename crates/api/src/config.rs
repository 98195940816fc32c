//! Process configuration read from environment variables.

use std::net::SocketAddr;

use school_observability::LogFormat;
use thiserror::Error;

pub const ADDR_VAR: &str = "SCHOOL_API_ADDR";
pub const SEED_VAR: &str = "SCHOOL_API_SEED";
pub const LOG_FORMAT_VAR: &str = "SCHOOL_LOG_FORMAT";

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: invalid socket address `{value}`")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var}: expected a boolean, got `{value}`")]
    InvalidBool { var: &'static str, value: String },

    #[error("{var}: {reason}")]
    InvalidLogFormat { var: &'static str, reason: String },
}

/// Runtime settings for the API binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub addr: SocketAddr,
    /// Start with the baseline dataset loaded.
    pub seed: bool,
    pub log_format: LogFormat,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable lookup (unset variables use defaults).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr_raw = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: addr_raw.clone(),
            })?;

        let seed = match lookup(SEED_VAR) {
            None => true,
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidBool {
                var: SEED_VAR,
                value: raw,
            })?,
        };

        let log_format = match lookup(LOG_FORMAT_VAR) {
            None => LogFormat::default(),
            Some(raw) => raw
                .parse::<LogFormat>()
                .map_err(|reason| ConfigError::InvalidLogFormat {
                    var: LOG_FORMAT_VAR,
                    reason,
                })?,
        };

        Ok(Self {
            addr,
            seed,
            log_format,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
