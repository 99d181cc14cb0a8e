//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! monitor.toml
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → MonitorConfig (validated, immutable)
//!     → registry / checker / server at startup
//!
//! TELEGRAM_TOKEN, CHAT_ID
//!     → loader.rs (Credentials::from_env)
//!     → alerting
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - All fields have defaults except the group list
//! - Secrets never live in the config file
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{
    AlertingConfig, Credentials, GroupConfig, ListenerConfig, LogFormat, MonitorConfig,
    ObservabilityConfig, ProbeConfig, ScheduleConfig,
};
pub use validation::ValidationError;
