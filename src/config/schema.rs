//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the monitor.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the service monitor.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct MonitorConfig {
    /// Listener configuration for the query interface.
    pub listener: ListenerConfig,

    /// Monitored groups, in the order they are reported.
    pub groups: Vec<GroupConfig>,

    /// Per-probe HTTP client settings.
    pub probe: ProbeConfig,

    /// Periodic check cadence.
    pub schedule: ScheduleConfig,

    /// Alert threshold and notification channel settings.
    pub alerting: AlertingConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// A named group of endpoints, typically the services hosted on one machine.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GroupConfig {
    /// Group identifier used in query parameters and results.
    pub name: String,

    /// Endpoint URLs probed with `GET`.
    #[serde(default)]
    pub endpoints: Vec<String>,
}

/// Probe client configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Upper bound for a single probe, connect through response headers.
    pub timeout_secs: u64,

    /// User-Agent sent with every probe.
    pub user_agent: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: concat!("service-monitor/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Periodic driver configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Run the periodic driver.
    pub enabled: bool,

    /// Seconds between the start of two consecutive cycles.
    pub interval_secs: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: 60,
        }
    }
}

/// Alerting configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AlertingConfig {
    /// Consecutive failures that trigger one alert.
    pub failure_threshold: u32,

    /// Telegram Bot API base URL.
    pub api_base: String,

    /// Timeout for a single notification request in seconds.
    pub timeout_secs: u64,
}

impl Default for AlertingConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 3,
            api_base: "https://api.telegram.org".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Notification credentials. Never read from the config file.
#[derive(Clone)]
pub struct Credentials {
    /// Bot token used to authenticate against the messaging API.
    pub token: String,

    /// Recipient chat identifier (numeric id or `@channel`).
    pub chat_id: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}
