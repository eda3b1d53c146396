//! API error responses
//!
//! Validation failures carry a field -> message map as JSON; every other
//! failure carries a plain-text body. Internal details are never exposed to
//! the caller.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::domain::{DomainError, FieldErrors};

/// Generic message returned when registration fails server-side
pub const REGISTRATION_ERROR_MESSAGE: &str = "An error occurred while registering the user.";

/// Generic message returned when lookup fails server-side
pub const LOOKUP_ERROR_MESSAGE: &str = "An error occurred while fetching the user.";

/// Response body of an API error
#[derive(Debug, Clone, PartialEq)]
pub enum ApiErrorBody {
    /// Field name -> violation message map (validation failures)
    Fields(FieldErrors),
    /// Plain-text message
    Text(String),
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ApiErrorBody,
}

impl ApiError {
    /// Validation failure: 400 with per-field messages
    pub fn validation(errors: FieldErrors) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ApiErrorBody::Fields(errors),
        }
    }

    /// Bad request with a plain-text message (e.g. malformed JSON)
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ApiErrorBody::Text(message.into()),
        }
    }

    /// Not found with a plain-text message
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            body: ApiErrorBody::Text(message.into()),
        }
    }

    /// Internal server error with a generic plain-text message
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ApiErrorBody::Text(message.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.body {
            ApiErrorBody::Fields(errors) => (self.status, Json(errors)).into_response(),
            ApiErrorBody::Text(message) => (self.status, message).into_response(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation { message } => Self::bad_request(message),
            DomainError::Registration { .. } => Self::internal(REGISTRATION_ERROR_MESSAGE),
            DomainError::Lookup { .. } => Self::internal(LOOKUP_ERROR_MESSAGE),
            DomainError::Storage { .. }
            | DomainError::Configuration { .. }
            | DomainError::Internal { .. } => Self::internal("An unexpected error occurred."),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.body {
            ApiErrorBody::Fields(errors) => write!(f, "{}: {:?}", self.status, errors),
            ApiErrorBody::Text(message) => write!(f, "{}: {}", self.status, message),
        }
    }
}

impl std::error::Error for ApiError {}
