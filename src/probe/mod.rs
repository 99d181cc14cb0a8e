//! Endpoint probing.
//!
//! # Data Flow
//! ```text
//! url
//!     → Probe::probe (one GET, bounded by a timeout)
//!     → ProbeOutcome (Up | Status(code) | Unreachable(kind))
//!     → ServiceStatus (reported entry)
//! ```
//!
//! # Design Decisions
//! - Probing never fails: every transport problem becomes a DOWN outcome
//! - No retries inside a probe; the next cycle is the retry
//! - Timeout and other transport failures are reported differently but
//!   count the same for alerting

pub mod http;

use async_trait::async_trait;
use serde::Serialize;

pub use self::http::HttpProber;

/// Why an endpoint could not be reached at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProbeError {
    #[serde(rename = "Request timed out")]
    Timeout,
    #[serde(rename = "Unable to connect")]
    Connect,
}

/// Classified result of a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The endpoint answered `200 OK`.
    Up,
    /// The endpoint answered with any other status code.
    Status(u16),
    /// No response was received.
    Unreachable(ProbeError),
}

impl ProbeOutcome {
    pub fn is_up(&self) -> bool {
        matches!(self, ProbeOutcome::Up)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    Up,
    Down,
}

/// One entry of a check result, as returned by the query interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceStatus {
    pub url: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ProbeError>,
}

impl ServiceStatus {
    pub fn new(url: impl Into<String>, outcome: ProbeOutcome) -> Self {
        let url = url.into();
        match outcome {
            ProbeOutcome::Up => Self {
                url,
                status: Status::Up,
                code: None,
                error: None,
            },
            ProbeOutcome::Status(code) => Self {
                url,
                status: Status::Down,
                code: Some(code),
                error: None,
            },
            ProbeOutcome::Unreachable(kind) => Self {
                url,
                status: Status::Down,
                code: None,
                error: Some(kind),
            },
        }
    }

    pub fn is_up(&self) -> bool {
        self.status == Status::Up
    }
}

/// Issues a single availability probe against one URL.
#[async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, url: &str) -> ProbeOutcome;
}
