use std::time::Instant;

use axum::{
    extract::{RawQuery, State},
    Json,
};
use serde::Serialize;

use crate::health::CheckReport;
use crate::http::server::AppState;
use crate::observability::metrics;

/// Query parameter naming a group; may repeat.
pub const GROUP_PARAM: &str = "vps";

#[derive(Serialize)]
pub struct StatusMessage {
    pub message: &'static str,
}

pub async fn get_root() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: "Service status checker",
    })
}

pub async fn get_check(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Json<CheckReport> {
    let requested = requested_groups(query.as_deref());
    let started = Instant::now();

    let report = state.checker.check_selected(requested.as_slice()).await;
    metrics::record_cycle("on_demand", started);

    let (up, down) = report.totals();
    tracing::info!(
        requested = ?requested,
        groups = report.groups.len(),
        up,
        down,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "On-demand check completed"
    );

    Json(report)
}

/// Group names from `?vps=a&vps=b`. Blank values are ignored, so an empty
/// result means "all groups".
pub fn requested_groups(query: Option<&str>) -> Vec<String> {
    let Some(query) = query else {
        return Vec::new();
    };

    url::form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| key == GROUP_PARAM)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}
