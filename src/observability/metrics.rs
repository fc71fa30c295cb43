//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_requests_total` (counter): relayed requests by operation and
//!   downstream status
//! - `relay_request_duration_seconds` (histogram): downstream round-trip
//!   latency by operation

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter on its own listener. Failure to install
/// is logged, not fatal: the relay works without metrics.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "metrics exporter listening"),
        Err(e) => tracing::error!(error = %e, "failed to install metrics exporter"),
    }
}

/// Record one relayed request.
pub fn record_relay(operation: &'static str, status: u16, start: Instant) {
    counter!(
        "relay_requests_total",
        "operation" => operation,
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("relay_request_duration_seconds", "operation" => operation)
        .record(start.elapsed().as_secs_f64());
}
