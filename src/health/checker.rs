//! Group checking.
//!
//! # Responsibilities
//! - Probe every endpoint of a group, in order, one at a time
//! - Feed outcomes to the failure tracker
//! - Dispatch an alert inline when a streak reaches the threshold
//! - Shape results per group, in registry or request order

use std::sync::Arc;
use std::time::Instant;

use futures_util::future::join_all;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::alerting::{Alert, Notifier};
use crate::health::tracker::FailureTracker;
use crate::observability::metrics;
use crate::probe::{Probe, ServiceStatus};
use crate::registry::{Group, Registry};

/// Results of one group, endpoints in configured order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupReport {
    pub group: String,
    pub results: Vec<ServiceStatus>,
}

/// Results of a check over several groups.
///
/// Serializes as a JSON object keyed by group name, keys in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub groups: Vec<GroupReport>,
}

impl CheckReport {
    pub fn get(&self, group: &str) -> Option<&[ServiceStatus]> {
        self.groups
            .iter()
            .find(|g| g.group == group)
            .map(|g| g.results.as_slice())
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.group.as_str())
    }

    /// `(up, down)` endpoint counts across all groups.
    pub fn totals(&self) -> (usize, usize) {
        self.groups
            .iter()
            .flat_map(|g| &g.results)
            .fold((0, 0), |(up, down), s| {
                if s.is_up() {
                    (up + 1, down)
                } else {
                    (up, down + 1)
                }
            })
    }
}

impl Serialize for CheckReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.group, &group.results)?;
        }
        map.end()
    }
}

/// Runs checks against the registry, sharing one failure tracker between
/// every caller.
pub struct Checker {
    registry: Arc<Registry>,
    tracker: Arc<FailureTracker>,
    prober: Arc<dyn Probe>,
    notifier: Arc<dyn Notifier>,
}

impl Checker {
    pub fn new(
        registry: Arc<Registry>,
        tracker: Arc<FailureTracker>,
        prober: Arc<dyn Probe>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            registry,
            tracker,
            prober,
            notifier,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn tracker(&self) -> &FailureTracker {
        &self.tracker
    }

    /// Probe `endpoints` sequentially. The next probe starts only after the
    /// previous outcome is recorded and any alert it triggered is dispatched.
    pub async fn check_group(&self, group: &str, endpoints: &[String]) -> Vec<ServiceStatus> {
        let mut results = Vec::with_capacity(endpoints.len());

        for url in endpoints {
            let started = Instant::now();
            let outcome = self.prober.probe(url).await;
            metrics::record_probe(group, outcome.is_up(), started);

            if outcome.is_up() {
                self.tracker.record_success(url);
                tracing::debug!(group = %group, url = %url, "Endpoint up");
            } else {
                let alert = self.tracker.record_failure(url);
                tracing::debug!(
                    group = %group,
                    url = %url,
                    outcome = ?outcome,
                    failures = self.tracker.failures(url),
                    alert,
                    "Endpoint down"
                );
                if alert {
                    self.dispatch(Alert::new(url.as_str(), group)).await;
                }
            }

            results.push(ServiceStatus::new(url.as_str(), outcome));
        }

        results
    }

    /// Check every registry group. Groups run concurrently with each other.
    pub async fn check_all(&self) -> CheckReport {
        self.check_groups(self.registry.groups().iter().collect()).await
    }

    /// Check the named groups in request order. Unknown names are skipped;
    /// an empty list checks everything.
    pub async fn check_selected<S: AsRef<str>>(&self, names: &[S]) -> CheckReport {
        if names.is_empty() {
            return self.check_all().await;
        }
        self.check_groups(self.registry.select(names)).await
    }

    async fn check_groups(&self, groups: Vec<&Group>) -> CheckReport {
        let reports = join_all(groups.into_iter().map(|group| async move {
            GroupReport {
                group: group.name.clone(),
                results: self.check_group(&group.name, &group.endpoints).await,
            }
        }))
        .await;

        CheckReport { groups: reports }
    }

    async fn dispatch(&self, alert: Alert) {
        let channel = self.notifier.name();
        match self.notifier.send(&alert).await {
            Ok(()) => {
                tracing::warn!(
                    url = %alert.url,
                    group = %alert.group,
                    channel = %channel,
                    threshold = self.tracker.threshold(),
                    "Failure threshold reached, alert sent"
                );
                metrics::record_alert(channel, true);
            }
            Err(e) => {
                tracing::error!(
                    url = %alert.url,
                    group = %alert.group,
                    channel = %channel,
                    error = %e,
                    "Failed to deliver alert"
                );
                metrics::record_alert(channel, false);
            }
        }
    }
}
