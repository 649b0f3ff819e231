//! Data Transfer Objects for API responses.
//!
//! The request side is decoded straight into
//! [`crate::domain::ChirpSubmission`] by the validator.

pub mod chirp;
