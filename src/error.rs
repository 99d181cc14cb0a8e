//! Crate-level error type.

use thiserror::Error;

use crate::alerting::AlertError;
use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("alerting setup failed: {0}")]
    Alerting(#[from] AlertError),
    #[error("HTTP client setup failed: {0}")]
    Client(#[from] reqwest::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
