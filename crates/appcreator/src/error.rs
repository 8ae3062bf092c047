//! Error types for template encoding and decoding

use thiserror::Error;

/// Errors raised while converting templates to and from JSON
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Input was not valid JSON, or did not match the template shape
    #[error("Failed to decode template: {0}")]
    Decode(#[source] serde_json::Error),

    /// A template or collection could not be serialized
    #[error("Failed to encode template: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Shorthand result type for codec operations
pub type Result<T> = std::result::Result<T, TemplateError>;
