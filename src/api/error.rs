//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::checker::CheckError;
use crate::models::Suggestions;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invalid_symptoms: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Suggestions>,
}

impl ErrorDetail {
    fn plain(code: &'static str, message: String) -> Self {
        Self {
            code,
            message,
            invalid_symptoms: None,
            suggestions: None,
        }
    }
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Authentication required")]
    Unauthorized,
    #[error(transparent)]
    Check(#[from] CheckError),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                ErrorDetail::plain("AUTH_REQUIRED", "Authentication required".to_string()),
            ),
            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorDetail::plain("INTERNAL", "An internal error occurred".to_string()),
                )
            }
            ApiError::Check(err) => check_error_parts(err),
        };

        (status, Json(ErrorBody { error: detail })).into_response()
    }
}

fn check_error_parts(err: CheckError) -> (StatusCode, ErrorDetail) {
    let code = err.kind();
    let message = err.to_string();
    match err {
        CheckError::InvalidPayload(_) | CheckError::InvalidSymptomCount { .. } => {
            (StatusCode::BAD_REQUEST, ErrorDetail::plain(code, message))
        }
        CheckError::TooFewValidSymptoms {
            invalid,
            suggestions,
        } => (
            StatusCode::BAD_REQUEST,
            ErrorDetail {
                code,
                message,
                invalid_symptoms: Some(invalid),
                suggestions: Some(suggestions),
            },
        ),
        CheckError::NoMatch {
            invalid,
            suggestions,
        } => (
            StatusCode::NOT_FOUND,
            ErrorDetail {
                code,
                message,
                invalid_symptoms: Some(invalid),
                suggestions: Some(suggestions),
            },
        ),
        CheckError::Catalog(e) => {
            tracing::error!(kind = code, error = %e, "Disease catalog unavailable");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail::plain(code, "Disease data is unavailable".to_string()),
            )
        }
    }
}
