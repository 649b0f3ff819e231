//! Chirp validation: payload decoding, length limit, and profanity masking.

use crate::domain::{ChirpSubmission, ProfanityFilter, ValidationOutcome};

/// Message returned when a chirp exceeds the length limit.
pub const TOO_LONG_MESSAGE: &str = "Chirp is too long";

/// Validates chirp submissions and produces a [`ValidationOutcome`].
///
/// # Rules
///
/// 1. **Decode**: the payload must be a JSON object with a string `body`
/// 2. **Length**: `body` must be at most `max_length` bytes, as received
/// 3. **Sanitize**: accepted bodies go through the [`ProfanityFilter`]
///
/// Validation is synchronous and side-effect free.
#[derive(Debug, Clone)]
pub struct ChirpValidator {
    max_length: usize,
    filter: ProfanityFilter,
}

impl ChirpValidator {
    /// Default maximum chirp length in bytes.
    pub const DEFAULT_MAX_LENGTH: usize = 140;

    /// Creates a validator with the given length limit and filter.
    pub fn new(max_length: usize, filter: ProfanityFilter) -> Self {
        Self { max_length, filter }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Decodes `payload` and validates the resulting submission.
    ///
    /// A decode failure yields [`ValidationOutcome::MalformedInput`] without
    /// any further processing.
    pub fn validate(&self, payload: &[u8]) -> ValidationOutcome {
        match serde_json::from_slice::<ChirpSubmission>(payload) {
            Ok(submission) => self.validate_submission(&submission),
            Err(e) => {
                tracing::info!(error = %e, "Rejected malformed chirp payload");
                ValidationOutcome::MalformedInput {
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Validates an already decoded submission.
    pub fn validate_submission(&self, submission: &ChirpSubmission) -> ValidationOutcome {
        let length = submission.body.len();

        if length > self.max_length {
            tracing::info!(length, max = self.max_length, "Rejected chirp over length limit");
            return ValidationOutcome::TooLong {
                message: TOO_LONG_MESSAGE.to_string(),
            };
        }

        let cleaned_body = self.filter.sanitize(&submission.body);
        tracing::debug!(length, "Accepted chirp");

        ValidationOutcome::Accepted { cleaned_body }
    }
}

impl Default for ChirpValidator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_LENGTH, ProfanityFilter::default())
    }
}
