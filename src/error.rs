//! HTTP-facing error type and JSON error envelope.
//!
//! Every error is rendered as:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Short link not found", "details": {} } }
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::application::services::ShortenError;

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("{message}")]
    InvalidBody { message: String, details: Value },
    #[error("{message}")]
    NotFound { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_body(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidBody {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status this error is rendered with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::InvalidBody { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::InvalidBody { message, details } => ("invalid_body", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, details = %self.to_error_info().details, "Request failed");
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<ShortenError> for AppError {
    fn from(e: ShortenError) -> Self {
        match e {
            ShortenError::InvalidInput(reason) => {
                AppError::bad_request("Invalid URL", json!({ "reason": reason }))
            }
            ShortenError::NotFound(code) => {
                AppError::not_found("Short link not found", json!({ "code": code }))
            }
            ShortenError::Exhausted { attempts } => AppError::internal(
                "Failed to generate unique code",
                json!({ "reason": "Too many collisions", "attempts": attempts }),
            ),
            ShortenError::StoreUnavailable(reason) => {
                AppError::internal("Storage unavailable", json!({ "reason": reason }))
            }
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::invalid_body(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_errors_map_to_statuses() {
        let cases = [
            (
                ShortenError::InvalidInput("bad".into()),
                StatusCode::BAD_REQUEST,
                "validation_error",
            ),
            (
                ShortenError::NotFound("zzzzzzzz".into()),
                StatusCode::NOT_FOUND,
                "not_found",
            ),
            (
                ShortenError::Exhausted { attempts: 5 },
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
            ),
            (
                ShortenError::StoreUnavailable("down".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
            ),
        ];

        for (err, status, code) in cases {
            let app_err = AppError::from(err);
            assert_eq!(app_err.status(), status);
            assert_eq!(app_err.to_error_info().code, code);
        }
    }

    #[test]
    fn test_not_found_details_carry_code() {
        let err = AppError::from(ShortenError::NotFound("abc12345".into()));
        assert_eq!(err.to_error_info().details["code"], "abc12345");
        assert_eq!(err.to_string(), "Short link not found");
    }

    #[test]
    fn test_invalid_body_is_unprocessable() {
        let err = AppError::invalid_body("Invalid request body", json!({}));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.to_error_info().code, "invalid_body");
    }

    #[test]
    fn test_into_response_status() {
        let response = AppError::not_found("Short link not found", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
