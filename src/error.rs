//! Error model shared by every handler.
//!
//! Each variant maps to one HTTP status and one stable `code`. Internal failures keep
//! their cause for the logs and only ever expose a fixed message to the caller.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Access denied")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("{0}")]
    NotFound(String),

    #[error("Email already registered")]
    EmailTaken,

    #[error("{message}")]
    Internal {
        message: &'static str,
        cause: anyhow::Error,
    },
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        ApiError::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        ApiError::NotFound(msg.into())
    }

    /// Wraps an unexpected failure; `message` is what the caller sees.
    pub fn internal(message: &'static str, cause: impl Into<anyhow::Error>) -> Self {
        ApiError::Internal {
            message,
            cause: cause.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::UserNotFound | ApiError::InvalidCredentials => {
                StatusCode::BAD_REQUEST
            }
            ApiError::MissingToken => StatusCode::UNAUTHORIZED,
            ApiError::InvalidToken => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::EmailTaken => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::UserNotFound => "user_not_found",
            ApiError::InvalidCredentials => "invalid_credentials",
            ApiError::MissingToken => "authentication_required",
            ApiError::InvalidToken => "invalid_token",
            ApiError::NotFound(_) => "not_found",
            ApiError::EmailTaken => "email_taken",
            ApiError::Internal { .. } => "internal_error",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let ApiError::Internal { message, cause } = &self {
            tracing::error!(error = %format!("{cause:#}"), %message, "internal error");
        }

        let body = ErrorBody {
            code: self.code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_kind() {
        assert_eq!(ApiError::validation("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::UserNotFound.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidCredentials.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MissingToken.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::InvalidToken.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::EmailTaken.status_code(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::internal("boom", anyhow::anyhow!("db down")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_message_hides_the_cause() {
        let err = ApiError::internal("Error creating blog", anyhow::anyhow!("connection refused"));
        assert_eq!(err.to_string(), "Error creating blog");
        assert_eq!(err.code(), "internal_error");
    }

    #[tokio::test]
    async fn response_body_carries_code_and_message() {
        let res = ApiError::MissingToken.into_response();
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["code"], "authentication_required");
        assert_eq!(json["message"], "Access denied");
    }
}
