//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the relay.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Downstream (Jira) client settings.
    pub upstream: UpstreamConfig,

    /// Frontend asset settings.
    pub frontend: FrontendConfig,

    /// Inbound request limits.
    pub limits: LimitsConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:5000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
        }
    }
}

/// Downstream client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Verify the downstream TLS certificate. Disabling this reproduces the
    /// permissive behavior some self-hosted Jira instances require, but is
    /// opt-in.
    pub verify_tls: bool,

    /// Total per-request deadline for downstream calls, in seconds.
    /// `None` means no deadline.
    pub timeout_secs: Option<u64>,

    /// Base URLs the relay may forward to. Empty means any target supplied
    /// via `X-Target-Url` is accepted; non-empty restricts by host.
    pub allowed_targets: Vec<String>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            verify_tls: true,
            timeout_secs: None,
            allowed_targets: Vec::new(),
        }
    }
}

/// Frontend asset configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FrontendConfig {
    /// Path to the HTML document served on `/`. When unset, the page
    /// embedded at build time is served. A configured path that cannot be
    /// read is a fatal startup error, never a per-request one.
    pub asset_path: Option<String>,
}

/// Inbound request limits.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum inbound body size in bytes (bounds attachment uploads).
    pub max_body_bytes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 10 * 1024 * 1024,
        }
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Total inbound request timeout in seconds. `None` (the default)
    /// imposes no deadline, matching the downstream default.
    pub request_secs: Option<u64>,
}

/// Observability settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Enable the Prometheus exposition endpoint.
    pub metrics_enabled: bool,

    /// Address the metrics endpoint binds to.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9100".to_string(),
        }
    }
}
