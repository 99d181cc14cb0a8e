//! HTTP query interface.
//!
//! # Data Flow
//! ```text
//! GET /            → static readiness message
//! GET /check/?vps= → handlers.rs → Checker::check_selected → JSON report
//! ```
//!
//! Every route shares the checker (and its failure tracker) with the
//! periodic driver.

pub mod handlers;
pub mod request;
pub mod server;

pub use request::X_REQUEST_ID;
pub use server::{AppState, HttpServer};
