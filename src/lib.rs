//! Jira Relay Library
//!
//! A local relay that forwards browser requests to a Jira REST API,
//! injecting the caller-supplied credential and sidestepping browser
//! cross-origin restrictions.

pub mod config;
pub mod http;
pub mod observability;
pub mod relay;

pub use config::RelayConfig;
pub use http::context::RelayContext;
pub use http::error::RelayError;
pub use http::HttpServer;
