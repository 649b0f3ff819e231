//! HTTP middleware for request processing.
//!
//! Provides hit counting for content routes, redirect fixing for nested
//! services, and request tracing.

pub mod hit_count;
pub mod nest_redirect;
pub mod tracing;

pub use hit_count::{HitCount, HitCountLayer};
