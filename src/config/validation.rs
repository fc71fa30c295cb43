//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check addresses parse and allow-list entries are absolute URLs
//! - Validate value ranges (limits > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: RelayConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::RelayConfig;

/// A single semantic configuration problem.
#[derive(Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// An address field does not parse as `host:port`.
    InvalidAddress { field: &'static str, value: String },
    /// An allow-list entry is not an absolute URL with a host.
    InvalidAllowedTarget(String),
    /// A limit field must be greater than zero.
    ZeroLimit(&'static str),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidAddress { field, value } => {
                write!(f, "{field}: '{value}' is not a valid socket address")
            }
            ValidationError::InvalidAllowedTarget(target) => {
                write!(f, "allowed_targets: '{target}' is not an absolute URL with a host")
            }
            ValidationError::ZeroLimit(field) => write!(f, "{field} must be greater than zero"),
        }
    }
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &RelayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    for target in &config.upstream.allowed_targets {
        match Url::parse(target) {
            Ok(url) if url.host_str().is_some() => {}
            _ => errors.push(ValidationError::InvalidAllowedTarget(target.clone())),
        }
    }

    if config.limits.max_body_bytes == 0 {
        errors.push(ValidationError::ZeroLimit("limits.max_body_bytes"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
