//! Health checking subsystem.
//!
//! # Data Flow
//! ```text
//! Periodic driver (periodic.rs)        On-demand query (http)
//!     → fixed-interval timer               → requested groups
//!                 ↘                       ↙
//!              Group checker (checker.rs)
//!                 → probe each endpoint, in order
//!                 → tracker.rs (record success / failure)
//!                 → alerting (on threshold)
//! ```
//!
//! # Design Decisions
//! - One tracker instance is shared by every caller
//! - Endpoints within a group are probed sequentially
//! - Alert delivery failures are logged and never abort a check

pub mod checker;
pub mod periodic;
pub mod tracker;

pub use checker::{CheckReport, Checker, GroupReport};
pub use periodic::PeriodicDriver;
pub use tracker::{FailureTracker, DEFAULT_FAILURE_THRESHOLD};
