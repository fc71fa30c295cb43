//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with an explicit route table
//! - Wire up middleware (tracing, request ID, body limit, optional timeout)
//! - Build the shared downstream client and inject it into handlers
//! - Load the frontend page once at startup (missing asset is fatal)
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{DefaultBodyLimit, State};
use axum::response::Html;
use axum::routing::{get, post};
use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::http::request::MakeRelayRequestId;
use crate::relay;
use crate::relay::client::Upstream;

/// Frontend page compiled into the binary, used when no asset path is
/// configured.
const DEFAULT_FRONTEND: &str = include_str!("../../assets/index.html");

/// Errors that abort server construction.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The configured frontend asset could not be read.
    #[error("cannot read frontend asset '{path}': {source}")]
    Asset {
        path: String,
        source: std::io::Error,
    },

    /// The downstream client could not be constructed.
    #[error("cannot build downstream client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared downstream client and target policy.
    pub upstream: Arc<Upstream>,
    /// Frontend HTML served on `/`.
    pub frontend: Arc<String>,
}

/// HTTP server for the relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Result<Self, StartupError> {
        let upstream = Arc::new(Upstream::from_config(&config.upstream)?);

        let frontend = match &config.frontend.asset_path {
            Some(path) => std::fs::read_to_string(path).map_err(|source| StartupError::Asset {
                path: path.clone(),
                source,
            })?,
            None => DEFAULT_FRONTEND.to_string(),
        };

        let state = AppState {
            upstream,
            frontend: Arc::new(frontend),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router: explicit route table plus middleware layers.
    fn build_router(config: &RelayConfig, state: AppState) -> Router {
        let passthrough = get(relay::passthrough::passthrough)
            .post(relay::passthrough::passthrough)
            .put(relay::passthrough::passthrough)
            .delete(relay::passthrough::passthrough);

        let mut router = Router::new()
            .route("/", get(index))
            .route("/api/relay/link", post(relay::link::create_link))
            .route(
                "/api/relay/attachment/{issue_key}",
                post(relay::attachment::upload_attachment),
            )
            .route("/api/relay/{*path}", passthrough)
            .with_state(state)
            .layer(DefaultBodyLimit::max(config.limits.max_body_bytes))
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(MakeRelayRequestId))
                    .layer(TraceLayer::new_for_http())
                    .layer(PropagateRequestIdLayer::x_request_id()),
            );

        if let Some(secs) = config.timeouts.request_secs {
            router = router.layer(TimeoutLayer::new(Duration::from_secs(secs)));
        }

        router
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// Serve the frontend page.
async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.frontend.as_str().to_owned())
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
