//! Outbound alert notifications.
//!
//! # Responsibilities
//! - Describe an alert (which URL, which group)
//! - Deliver it through a notification channel
//!
//! # Design Decisions
//! - Delivery failures are returned, never retried here; the checker logs
//!   them and carries on with the next endpoint
//! - Channels are trait objects so tests can substitute a recorder

pub mod telegram;

use async_trait::async_trait;
use thiserror::Error;

pub use self::telegram::TelegramNotifier;

/// An endpoint crossed the failure threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub url: String,
    pub group: String,
}

impl Alert {
    pub fn new(url: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            group: group.into(),
        }
    }

    /// One-line, human readable message body.
    pub fn message(&self) -> String {
        format!("Service {} is down! From {}", self.url, self.group)
    }
}

#[derive(Debug, Error)]
pub enum AlertError {
    #[error("invalid notification endpoint: {0}")]
    Endpoint(#[from] url::ParseError),
    #[error("notification API base `{0}` cannot take a path")]
    BaseUrl(String),
    #[error("notification request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("notification rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// A channel able to deliver alerts to the configured recipient.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, alert: &Alert) -> Result<(), AlertError>;

    /// Channel name for logs and metrics.
    fn name(&self) -> &str;
}
