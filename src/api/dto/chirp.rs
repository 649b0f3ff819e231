//! DTOs for the chirp validation endpoint.

use serde::Serialize;

/// Response for an accepted chirp.
///
/// ```json
/// { "cleaned_body": "I had something **** this morning" }
/// ```
#[derive(Debug, Serialize)]
pub struct ValidateChirpResponse {
    pub cleaned_body: String,
}
