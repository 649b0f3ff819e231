//! Business logic services for the application layer.

pub mod admin_reporter;
pub mod chirp_validator;

pub use admin_reporter::AdminReporter;
pub use chirp_validator::ChirpValidator;
