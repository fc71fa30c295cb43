//! Relay handlers: one downstream call per inbound request.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → RelayContext (target + credential from headers)
//!     → client.rs (shared reqwest client, target policy)
//!     → one of:
//!         passthrough.rs  GET/POST/PUT/DELETE /api/relay/{*path}
//!         link.rs         POST /api/relay/link
//!         attachment.rs   POST /api/relay/attachment/{issue_key}
//!     → response.rs (relay status + body back to the caller)
//! ```
//!
//! # Design Decisions
//! - Stateless: every request is independent, no caching, no retries
//! - Exactly one downstream attempt per inbound request
//! - Downstream error statuses are relayed, not masked

pub mod attachment;
pub mod client;
pub mod link;
pub mod passthrough;
pub mod response;

pub use client::Upstream;
