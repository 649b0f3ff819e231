//! Chirp submission and validation outcome types.

use serde::Deserialize;

/// A chirp as submitted by a client.
///
/// Built from the request payload and dropped when the request completes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChirpSubmission {
    pub body: String,
}

/// Result of validating a single chirp submission.
///
/// Exactly one variant holds per validation: a rejected chirp never
/// carries a cleaned body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Body exceeds the configured length limit.
    TooLong { message: String },

    /// Body passed validation; banned words are masked.
    Accepted { cleaned_body: String },

    /// Payload could not be decoded into a [`ChirpSubmission`].
    ///
    /// `reason` is the decoder message, kept for logs only.
    MalformedInput { reason: String },
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}
