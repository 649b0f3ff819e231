//! Application layer services implementing the chirp and admin rules.
//!
//! Services wrap domain types with configuration (length limit, banned
//! words) and shared state (the hit counter), and give HTTP handlers a
//! small API to call.
//!
//! # Available Services
//!
//! - [`services::chirp_validator::ChirpValidator`] - Chirp decoding, length check, masking
//! - [`services::admin_reporter::AdminReporter`] - Hit count report and reset

pub mod services;
