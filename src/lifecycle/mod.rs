//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Read credentials → Build checker
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     broadcast → periodic driver exits, server drains
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal, including missing credentials
//! - Listener binds last, after every subsystem is built

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::{bootstrap, build_checker, build_notifier, Bootstrap};
