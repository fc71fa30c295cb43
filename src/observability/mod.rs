//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! handlers produce:
//!     → tracing events (structured fields: method, url, status)
//!     → metrics.rs (counters, histograms)
//!
//! consumers:
//!     → stdout log subscriber (initialized in main)
//!     → Prometheus scrape endpoint (opt-in via config)
//! ```
//!
//! # Design Decisions
//! - Request IDs flow through tower-http layers, not hand-rolled plumbing
//! - Metric updates are cheap atomic operations
//! - The exporter is opt-in; the relay is usable with logging alone

pub mod metrics;
