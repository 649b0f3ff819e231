//! Handler for chirp validation endpoint.

use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    http::StatusCode,
    response::Response,
};

use crate::api::dto::chirp::ValidateChirpResponse;
use crate::domain::ValidationOutcome;
use crate::error::{AppError, json_response};
use crate::state::AppState;

/// Validates a chirp and returns its sanitized body.
///
/// # Endpoint
///
/// `POST /api/validate_chirp`
///
/// # Request Body
///
/// ```json
/// { "body": "I had something kerfuffle this morning" }
/// ```
///
/// # Response
///
/// ```json
/// { "cleaned_body": "I had something **** this morning" }
/// ```
///
/// # Response Codes
///
/// - **200 OK**: Chirp accepted, banned words masked
/// - **400 Bad Request**: `{"error": "Chirp is too long"}`
/// - **413 Payload Too Large**: Body exceeds the request body limit
/// - **500 Internal Server Error**: Body is not valid JSON or lacks `body`
///
/// The raw body is taken as bytes, and its rejection converted, so every
/// failure goes through [`AppError`] instead of axum's plain-text rejections.
pub async fn validate_chirp_handler(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, AppError> {
    let body = body?;

    match state.chirp_validator.validate(&body) {
        ValidationOutcome::Accepted { cleaned_body } => Ok(json_response(
            StatusCode::OK,
            &ValidateChirpResponse { cleaned_body },
        )),
        ValidationOutcome::TooLong { message } => Err(AppError::bad_request(message)),
        ValidationOutcome::MalformedInput { reason } => Err(AppError::malformed(reason)),
    }
}
