//! HTTP availability monitor library.
//!
//! Probes groups of HTTP endpoints, counts consecutive failures per URL and
//! sends one notification each time a streak reaches the threshold.

pub mod alerting;
pub mod config;
pub mod error;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod probe;
pub mod registry;

pub use config::MonitorConfig;
pub use error::MonitorError;
pub use health::{CheckReport, Checker, FailureTracker};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use registry::Registry;
