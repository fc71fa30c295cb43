//! HTTP surface of the relay.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, route table, middleware)
//!     → request.rs (request ID generation)
//!     → context.rs (extract target URL + credential from headers)
//!     → relay handlers (one downstream call each)
//!     → error.rs (map failures to JSON error responses)
//! ```

pub mod context;
pub mod error;
pub mod request;
pub mod server;

pub use context::{RelayContext, X_TARGET_URL};
pub use error::RelayError;
pub use request::MakeRelayRequestId;
pub use server::HttpServer;
