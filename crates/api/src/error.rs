//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::{DomainError, ValidationErrors};
use serde::Serialize;

/// Error body returned by failing endpoints other than not-found.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Body of 404 responses: a bare message.
#[derive(Debug, Serialize)]
pub struct NotFoundResponse {
    pub message: String,
}

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Bad request from the client.
    BadRequest { message: String, error: String },
    /// Resource not found.
    NotFound(String),
    /// Domain or storage error.
    Domain(DomainError),
    /// Internal server error.
    Internal { message: String, error: String },
}

impl ApiError {
    /// Rejects input that failed field validation.
    pub fn validation(errors: ValidationErrors) -> Self {
        ApiError::BadRequest {
            message: "There is an error validating the location data provided".to_string(),
            error: errors.to_string(),
        }
    }

    /// Reports a body or query string that could not be parsed.
    pub fn unprocessable_input(error: impl std::fmt::Display) -> Self {
        ApiError::Internal {
            message: "there is an error processing the location data provided".to_string(),
            error: error.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest { message, error } => {
                error_response(StatusCode::BAD_REQUEST, message, Some(error))
            }
            ApiError::NotFound(message) => not_found(message),
            ApiError::Domain(err) => domain_error_to_response(err),
            ApiError::Internal { message, error } => {
                tracing::error!(%error, "{message}");
                error_response(StatusCode::INTERNAL_SERVER_ERROR, message, Some(error))
            }
        }
    }
}

fn error_response(status: StatusCode, message: String, error: Option<String>) -> Response {
    let body = ErrorResponse {
        success: false,
        message,
        error,
    };
    (status, axum::Json(body)).into_response()
}

fn not_found(message: String) -> Response {
    (StatusCode::NOT_FOUND, axum::Json(NotFoundResponse { message })).into_response()
}

fn domain_error_to_response(err: DomainError) -> Response {
    match &err {
        DomainError::Repository(repo_err) if repo_err.is_not_found() => {
            let id = repo_err.location_id().unwrap_or_default();
            not_found(format!("The location ID {id} does not exist"))
        }
        DomainError::Repository(_) => {
            tracing::error!(error = %err, "location storage error");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "there is an error accessing the location data".to_string(),
                Some(err.to_string()),
            )
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        ApiError::Domain(err)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::validation(errors)
    }
}
