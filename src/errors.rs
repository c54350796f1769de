//! Centralized error handling.
//!
//! Every fallible operation in the signup/authentication pipeline returns a
//! `ChatError`, classified at the point of detection and carried as a typed
//! value to the HTTP boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// Closed status enum carried end-to-end in responses so callers can branch
/// without inspecting message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    Success,
    ValidationError,
    AuthenticationError,
    ServerError,
}

/// Application error types
#[derive(Error, Debug)]
pub enum ChatError {
    // Authentication
    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid username or password")]
    InvalidCredentials,

    // Uniqueness violations, kept distinct from generic server failures so
    // "username taken" can be surfaced as such
    #[error("{0}")]
    Conflict(String),

    // Validation (never reaches I/O)
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Token error")]
    Token(#[from] jsonwebtoken::errors::Error),

    // Internal
    #[error("Internal server error")]
    Server(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
    status: ResponseStatus,
}

impl ChatError {
    /// Get error code for client
    fn code(&self) -> &'static str {
        match self {
            ChatError::Unauthorized => "UNAUTHORIZED",
            ChatError::InvalidCredentials => "INVALID_CREDENTIALS",
            ChatError::Conflict(_) => "CONFLICT",
            ChatError::Validation(_) => "VALIDATION_ERROR",
            ChatError::Database(_) => "DATABASE_ERROR",
            ChatError::Token(_) => "TOKEN_ERROR",
            ChatError::Server(_) => "INTERNAL_ERROR",
        }
    }

    /// Classify into the closed status enum
    pub fn status(&self) -> ResponseStatus {
        match self {
            ChatError::Validation(_) => ResponseStatus::ValidationError,
            ChatError::Unauthorized | ChatError::InvalidCredentials | ChatError::Token(_) => {
                ResponseStatus::AuthenticationError
            }
            ChatError::Conflict(_) | ChatError::Database(_) | ChatError::Server(_) => {
                ResponseStatus::ServerError
            }
        }
    }

    /// Get HTTP status code
    fn http_status(&self) -> StatusCode {
        match self {
            ChatError::Unauthorized | ChatError::InvalidCredentials | ChatError::Token(_) => {
                StatusCode::UNAUTHORIZED
            }
            ChatError::Conflict(_) => StatusCode::CONFLICT,
            ChatError::Validation(_) => StatusCode::BAD_REQUEST,
            ChatError::Database(_) | ChatError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            // Show full message for client errors
            ChatError::Validation(msg) => msg.clone(),
            ChatError::Conflict(msg) => msg.clone(),

            // Hide details for internal/security errors
            ChatError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            ChatError::Token(e) => {
                tracing::error!("Token error: {:?}", e);
                "Invalid or expired token".to_string()
            }
            ChatError::Server(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Use default message for others
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
                status: self.status(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type ChatResult<T> = Result<T, ChatError>;

/// Convenience constructors
impl ChatError {
    pub fn conflict(msg: impl Into<String>) -> Self {
        ChatError::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        ChatError::Validation(msg.into())
    }

    pub fn server(msg: impl Into<String>) -> Self {
        ChatError::Server(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_are_bad_requests() {
        let err = ChatError::validation("username is required");
        assert_eq!(err.status(), ResponseStatus::ValidationError);
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn credential_mismatch_is_authentication_class() {
        assert_eq!(
            ChatError::InvalidCredentials.status(),
            ResponseStatus::AuthenticationError
        );
        assert_eq!(
            ChatError::InvalidCredentials.http_status(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn conflict_maps_to_server_class_but_409() {
        let err = ChatError::conflict("username already taken");
        assert_eq!(err.status(), ResponseStatus::ServerError);
        assert_eq!(err.http_status(), StatusCode::CONFLICT);
    }

    #[test]
    fn server_message_hides_internal_detail() {
        let err = ChatError::server("connection pool exhausted");
        assert_eq!(err.user_message(), "An internal error occurred");
    }
}
