//! HTTP request handlers for API and admin endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod admin;
pub mod health;
pub mod validate_chirp;

pub use admin::{metrics_handler, reset_handler};
pub use health::health_handler;
pub use validate_chirp::validate_chirp_handler;
