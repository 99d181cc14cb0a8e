//! Service availability monitor.
//!
//! # Architecture Overview
//!
//! ```text
//!   ┌──────────────────┐      ┌───────────────────┐
//!   │ periodic driver  │      │  GET /check/?vps= │
//!   │  (every 60 s)    │      │   (axum handler)  │
//!   └────────┬─────────┘      └─────────┬─────────┘
//!            └──────────┬───────────────┘
//!                       ▼
//!              ┌─────────────────┐     ┌──────────────┐
//!              │  group checker  │────▶│ http prober  │──▶ endpoints
//!              └────────┬────────┘     └──────────────┘
//!                       ▼
//!              ┌─────────────────┐     ┌──────────────┐
//!              │ failure tracker │────▶│   telegram   │──▶ chat
//!              └─────────────────┘     └──────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use service_monitor::lifecycle::{self, signals, Shutdown};
use service_monitor::observability::{logging, metrics};
use service_monitor::HttpServer;

#[derive(Parser)]
#[command(name = "service-monitor")]
#[command(about = "Periodically probes HTTP endpoints and alerts on repeated failures", long_about = None)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long, env = "MONITOR_CONFIG", default_value = "monitor.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logging is not up yet; report startup failures on stderr.
    let boot = match lifecycle::bootstrap(&args.config) {
        Ok(boot) => boot,
        Err(e) => {
            eprintln!("service-monitor: {e}");
            return Err(e.into());
        }
    };
    let config = boot.config;

    logging::init_logging(&config.observability);
    tracing::info!("service-monitor v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        path = %args.config.display(),
        bind_address = %config.listener.bind_address,
        groups = config.groups.len(),
        interval_secs = config.schedule.interval_secs,
        failure_threshold = config.alerting.failure_threshold,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let notifier = lifecycle::build_notifier(&config, &boot.credentials)?;
    let checker = lifecycle::build_checker(&config, notifier)?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        signals::wait_for_signal().await;
        shutdown.trigger();
    });

    HttpServer::new(config, checker)
        .run(listener, server_shutdown)
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
