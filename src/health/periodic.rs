//! Periodic checking.
//!
//! # Responsibilities
//! - Run a full check of every group on a fixed interval
//! - Log a summary of each cycle
//!
//! # Design Decisions
//! - Each cycle runs in its own task; a slow cycle never delays the next
//!   tick, so cycles may overlap with each other and with on-demand checks
//! - Cycle tasks are owned by a `JoinSet`; on shutdown the driver stops
//!   ticking and waits for in-flight cycles so no alert is cut off mid-send
//! - The first cycle starts one interval after startup

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::broadcast;
use tokio::task::JoinSet;
use tokio::time::{self, MissedTickBehavior};

use crate::health::checker::Checker;
use crate::observability::metrics;

pub struct PeriodicDriver {
    checker: Arc<Checker>,
    interval: Duration,
}

impl PeriodicDriver {
    pub fn new(checker: Arc<Checker>, interval: Duration) -> Self {
        Self { checker, interval }
    }

    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            interval_secs = self.interval.as_secs(),
            groups = self.checker.registry().len(),
            "Periodic checks starting"
        );

        let mut ticker = time::interval_at(time::Instant::now() + self.interval, self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut cycles = JoinSet::new();

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    cycles.spawn(run_cycle(self.checker.clone()));
                }
                Some(joined) = cycles.join_next(), if !cycles.is_empty() => {
                    if let Err(e) = joined {
                        tracing::error!(error = %e, "Periodic check task failed");
                    }
                }
                _ = shutdown.recv() => {
                    tracing::info!("Periodic driver received shutdown signal, exiting loop");
                    break;
                }
            }
        }

        if !cycles.is_empty() {
            tracing::info!(in_flight = cycles.len(), "Waiting for running checks to finish");
        }
        while let Some(joined) = cycles.join_next().await {
            if let Err(e) = joined {
                tracing::error!(error = %e, "Periodic check task failed");
            }
        }
        tracing::info!("Periodic driver stopped");
    }
}

async fn run_cycle(checker: Arc<Checker>) {
    let started = Instant::now();
    let report = checker.check_all().await;
    metrics::record_cycle("periodic", started);

    let (up, down) = report.totals();
    for group in &report.groups {
        for status in group.results.iter().filter(|s| !s.is_up()) {
            tracing::warn!(
                group = %group.group,
                url = %status.url,
                code = ?status.code,
                error = ?status.error,
                "Service down"
            );
        }
    }
    tracing::info!(
        groups = report.groups.len(),
        up,
        down,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Periodic check completed"
    );
}
