use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::api::ErrorResponse;
use crate::llm::LlmError;

/// Request-level failure taxonomy.
///
/// Validation failures (400-class) carry the caller-facing message verbatim.
/// Collaborator failures (database, AI backend) are logged and surfaced with a
/// generic message; they are never retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    MissingFields(String),

    #[error("{0}")]
    InvalidCuisine(String),

    #[error("{0}")]
    InvalidTags(String),

    #[error("{0}")]
    InvalidIdentifier(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    NotFound(String),

    /// The AI backend returned data not matching the declared schema.
    /// Fatal to the current request; there is no non-AI fallback.
    #[error("AI output did not match the expected shape: {0}")]
    MalformedAiOutput(String),

    #[error("AI backend failure: {0}")]
    Llm(#[from] LlmError),

    #[error("database failure: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("{0}")]
    Unexpected(String),
}

impl ApiError {
    /// Stable machine-readable code surfaced in the response body.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::MissingFields(_) => "MissingFields",
            ApiError::InvalidCuisine(_) => "InvalidCuisine",
            ApiError::InvalidTags(_) => "InvalidTags",
            ApiError::InvalidIdentifier(_) => "InvalidIdentifier",
            ApiError::Unauthorized(_) => "Unauthorized",
            ApiError::NotFound(_) => "NotFound",
            ApiError::MalformedAiOutput(_) => "MalformedAIOutput",
            ApiError::Llm(_) | ApiError::Database(_) | ApiError::Unexpected(_) => {
                "UnexpectedFailure"
            }
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFields(_)
            | ApiError::InvalidCuisine(_)
            | ApiError::InvalidTags(_)
            | ApiError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::MalformedAiOutput(_)
            | ApiError::Llm(_)
            | ApiError::Database(_)
            | ApiError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            ApiError::Llm(_) | ApiError::Database(_) | ApiError::Unexpected(_) => {
                tracing::error!(error = %self, "request failed");
                "Internal server error".to_string()
            }
            ApiError::MalformedAiOutput(_) => {
                tracing::error!(error = %self, "AI backend returned malformed output");
                self.to_string()
            }
            _ => self.to_string(),
        };

        (
            status,
            Json(ErrorResponse {
                error: self.code().to_string(),
                message,
            }),
        )
            .into_response()
    }
}
