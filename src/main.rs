//! Jira Relay
//!
//! A small HTTP relay that sits between a local browser frontend and a Jira
//! REST API. The browser cannot call Jira directly (CORS, XSRF), so it talks
//! to this process instead; the relay re-issues each request against the
//! target Jira instance with the caller-supplied credential and passes the
//! response back.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌───────────────────────────────────────────┐
//!                        │                 JIRA RELAY                │
//!                        │                                           │
//!   Browser Request      │  ┌─────────┐    ┌─────────┐   ┌────────┐ │
//!   ────────────────────▶│  │  http   │───▶│ context │──▶│ relay  │ │
//!                        │  │ server  │    │ extract │   │handlers│ │
//!                        │  └─────────┘    └─────────┘   └───┬────┘ │
//!                        │                                   │      │
//!   Browser Response     │  ┌──────────┐                ┌───▼────┐ │      Jira
//!   ◀────────────────────│  │ response │◀───────────────│upstream│─┼────▶ REST
//!                        │  │  relay   │                │ client │ │       API
//!                        │  └──────────┘                └────────┘ │
//!                        │                                          │
//!                        │  config · observability · error mapping  │
//!                        └───────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use jira_relay::config::loader::load_config;
use jira_relay::config::RelayConfig;
use jira_relay::http::HttpServer;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "jira-relay", version, about = "Local relay for a Jira REST API")]
struct Args {
    /// Path to the TOML configuration file. Defaults apply when omitted.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the listener bind address (e.g. "127.0.0.1:5000").
    #[arg(long, value_name = "ADDR")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jira_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("jira-relay v0.1.0 starting");

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => RelayConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        verify_tls = config.upstream.verify_tls,
        allowed_targets = config.upstream.allowed_targets.len(),
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Initialize metrics exposition
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            jira_relay::observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Create and run HTTP server
    let server = HttpServer::new(config)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
