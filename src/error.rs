//! Application error type and JSON response glue.
//!
//! Every error path answers with a `{"error": "<message>"}` JSON body. If the
//! body itself cannot be encoded, [`FALLBACK_ERROR_BODY`] is written verbatim
//! so the client still receives well-formed JSON.

use axum::{
    extract::rejection::BytesRejection,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Static body used when a response payload cannot be serialized.
pub const FALLBACK_ERROR_BODY: &str = r#"{"error":"Something went wrong"}"#;

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Expected, recoverable rejection of client input (400).
    #[error("{message}")]
    Validation { message: String },

    /// Request body is not valid JSON or lacks required fields (500).
    ///
    /// `reason` is logged, never returned to the client.
    #[error("Couldn't decode parameters")]
    MalformedInput { reason: String },

    /// Request body exceeded the body size limit (413).
    #[error("Request body too large")]
    PayloadTooLarge,

    /// Anything else that went wrong while building a response (500).
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            reason: reason.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::MalformedInput { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::malformed(rejection.body_text())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::MalformedInput { reason } = &self {
            tracing::warn!(%reason, "Error decoding parameters");
        }

        let message = self.to_string();
        json_response(
            self.status_code(),
            &ErrorBody {
                error: message.as_str(),
            },
        )
    }
}

/// Serializes `payload` into a JSON response with the given status.
///
/// Falls back to a 500 with [`FALLBACK_ERROR_BODY`] if encoding fails.
pub fn json_response<T: Serialize>(status: StatusCode, payload: &T) -> Response {
    match serde_json::to_vec(payload) {
        Ok(bytes) => (status, [(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Error marshalling JSON response");
            fallback_response()
        }
    }
}

/// The static 500 response used when dynamic encoding fails.
pub fn fallback_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "application/json")],
        FALLBACK_ERROR_BODY,
    )
        .into_response()
}
