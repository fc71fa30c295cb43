//! Shared downstream HTTP client and target policy.
//!
//! # Design Decisions
//! - One long-lived `reqwest::Client` built at startup and injected into
//!   handlers through application state, never an ambient global
//! - TLS verification is on unless explicitly disabled in config
//! - No downstream deadline unless one is configured

use std::time::Duration;

use url::Url;

use crate::config::UpstreamConfig;
use crate::http::context::RelayContext;
use crate::http::error::RelayError;

/// Header Jira requires on non-browser API calls to bypass XSRF checks.
pub const X_ATLASSIAN_TOKEN: &str = "X-Atlassian-Token";

/// Value for [`X_ATLASSIAN_TOKEN`].
pub const NO_CHECK: &str = "no-check";

/// Downstream client plus the target allow-list policy.
pub struct Upstream {
    http: reqwest::Client,
    /// Lowercased hostnames the relay may forward to; empty allows any.
    allowed_hosts: Vec<String>,
}

impl Upstream {
    /// Build the client from configuration. Allow-list entries are parsed
    /// down to their hosts; config validation guarantees they parse.
    pub fn from_config(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if !config.verify_tls {
            builder = builder.danger_accept_invalid_certs(true);
        }
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        let allowed_hosts = config
            .allowed_targets
            .iter()
            .filter_map(|target| Url::parse(target).ok())
            .filter_map(|url| url.host_str().map(str::to_ascii_lowercase))
            .collect();

        Ok(Self { http, allowed_hosts })
    }

    /// The shared request client.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Reject targets outside the configured allow-list.
    pub fn ensure_allowed(&self, ctx: &RelayContext) -> Result<(), RelayError> {
        if self.allowed_hosts.is_empty() {
            return Ok(());
        }
        let host = Url::parse(&ctx.target_base)
            .ok()
            .and_then(|url| url.host_str().map(str::to_ascii_lowercase));
        match host {
            Some(host) if self.allowed_hosts.contains(&host) => Ok(()),
            _ => Err(RelayError::TargetNotAllowed(ctx.target_base.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(target: &str) -> RelayContext {
        RelayContext {
            target_base: target.to_string(),
            credential: "Bearer t".to_string(),
        }
    }

    #[test]
    fn empty_allow_list_accepts_any_target() {
        let upstream = Upstream::from_config(&UpstreamConfig::default()).unwrap();
        assert!(upstream.ensure_allowed(&ctx("https://anywhere.example")).is_ok());
    }

    #[test]
    fn listed_host_is_accepted_case_insensitively() {
        let config = UpstreamConfig {
            allowed_targets: vec!["https://jira.example.com".into()],
            ..UpstreamConfig::default()
        };
        let upstream = Upstream::from_config(&config).unwrap();
        assert!(upstream.ensure_allowed(&ctx("https://JIRA.example.com:8443")).is_ok());
    }

    #[test]
    fn unlisted_host_is_rejected() {
        let config = UpstreamConfig {
            allowed_targets: vec!["https://jira.example.com".into()],
            ..UpstreamConfig::default()
        };
        let upstream = Upstream::from_config(&config).unwrap();

        let err = upstream.ensure_allowed(&ctx("https://evil.example")).unwrap_err();
        assert!(matches!(err, RelayError::TargetNotAllowed(_)));
    }

    #[test]
    fn unparseable_target_is_rejected_when_list_is_set() {
        let config = UpstreamConfig {
            allowed_targets: vec!["https://jira.example.com".into()],
            ..UpstreamConfig::default()
        };
        let upstream = Upstream::from_config(&config).unwrap();
        assert!(upstream.ensure_allowed(&ctx("not a url")).is_err());
    }
}
