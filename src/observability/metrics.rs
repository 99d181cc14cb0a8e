//! Metrics collection and exposition.
//!
//! # Metrics
//! - `monitor_probes_total` (counter): probes by group, status
//! - `monitor_probe_duration_seconds` (histogram): probe latency by group
//! - `monitor_alerts_total` (counter): alert dispatches by channel, result
//! - `monitor_check_cycles_total` (counter): cycles by trigger
//! - `monitor_check_cycle_duration_seconds` (histogram): cycle latency by trigger
//!
//! Recording is a no-op until a recorder is installed with [`init_metrics`].

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its HTTP scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_probe(group: &str, up: bool, started: Instant) {
    let status = if up { "up" } else { "down" };
    counter!("monitor_probes_total", "group" => group.to_string(), "status" => status).increment(1);
    histogram!("monitor_probe_duration_seconds", "group" => group.to_string())
        .record(started.elapsed().as_secs_f64());
}

pub fn record_alert(channel: &str, delivered: bool) {
    let result = if delivered { "sent" } else { "failed" };
    counter!("monitor_alerts_total", "channel" => channel.to_string(), "result" => result)
        .increment(1);
}

pub fn record_cycle(trigger: &'static str, started: Instant) {
    counter!("monitor_check_cycles_total", "trigger" => trigger).increment(1);
    histogram!("monitor_check_cycle_duration_seconds", "trigger" => trigger)
        .record(started.elapsed().as_secs_f64());
}
