//! # Chirpy
//!
//! A small HTTP service for short messages ("chirps"), built with Axum.
//! It validates chirp length, masks banned words, serves static files, and
//! keeps an in-memory hit count for admins.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Chirp types, profanity masking, hit counter
//! - **Application Layer** ([`application`]) - Chirp validation and admin reporting
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional overrides (also read from .env)
//! export LISTEN="0.0.0.0:8080"
//! export BANNED_WORDS="kerfuffle,sharbert,fornax"
//!
//! cargo run
//!
//! curl -X POST localhost:8080/api/validate_chirp -d '{"body": "what a kerfuffle"}'
//! # {"cleaned_body":"what a ****"}
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AdminReporter, ChirpValidator};
    pub use crate::domain::{ChirpSubmission, HitCounter, ProfanityFilter, ValidationOutcome};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
