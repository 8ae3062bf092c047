//! Error handling for the API server
//!
//! Clients only ever see a status code and a short plain-text message.
//! Backend details are logged where the failure happens.

use appcreator::TemplateError;
use appcreator_store::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed JSON conversion: {0}")]
    BadRequest(#[source] TemplateError),

    #[error("Conversion to JSON was unsuccessful: {0}")]
    Serialization(#[source] TemplateError),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("{message} ({source})")]
    Store {
        message: &'static str,
        #[source]
        source: StoreError,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<TemplateError> for ApiError {
    fn from(error: TemplateError) -> Self {
        match error {
            TemplateError::Decode(_) => ApiError::BadRequest(error),
            TemplateError::Encode(_) => ApiError::Serialization(error),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "Failed JSON conversion."),
            ApiError::Serialization(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Conversion to JSON was unsuccessful.",
            ),
            // Lookups of unknown ids surface as a server error, never an empty 200.
            ApiError::TemplateNotFound(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error fetching template from database.",
            ),
            ApiError::Store { message, .. } => (StatusCode::INTERNAL_SERVER_ERROR, message),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error."),
        };

        (status, message).into_response()
    }
}

// Convenience functions for common errors
impl ApiError {
    /// Wrap a storage failure with the message shown to clients
    pub fn store(message: &'static str, error: StoreError) -> Self {
        match error {
            StoreError::NotFound(id) => Self::TemplateNotFound(id),
            source => Self::Store { message, source },
        }
    }
}
