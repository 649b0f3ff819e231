//! Domain layer containing the chirp rules and shared counters.
//!
//! Nothing here touches HTTP; handlers in [`crate::api`] translate between
//! the wire format and these types.
//!
//! # Architecture
//!
//! - [`chirp`] - Submission and validation outcome types
//! - [`profanity`] - Whole-word banned-word masking
//! - [`hit_counter`] - Atomic hit counter shared across requests

pub mod chirp;
pub mod hit_counter;
pub mod profanity;

pub use chirp::{ChirpSubmission, ValidationOutcome};
pub use hit_counter::HitCounter;
pub use profanity::ProfanityFilter;
