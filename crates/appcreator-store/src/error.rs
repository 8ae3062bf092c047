//! Error types for template storage

use thiserror::Error;

/// Storage-specific errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Template not found: {0}")]
    NotFound(String),

    #[error("Storage backend error: {0}")]
    Backend(String),

    #[error("Stored document is corrupt: {0}")]
    Codec(#[from] appcreator::TemplateError),
}

/// Result type for storage operations
pub type Result<T> = std::result::Result<T, StoreError>;
