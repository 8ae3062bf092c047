//! App creator templates: pre-built application layouts stored as opaque
//! configuration payloads plus the metadata needed to list them.
//!
//! This crate owns the [`Template`] record and its JSON wire format. Storage
//! lives in `appcreator-store`, the HTTP surface in `appcreator-server`.

pub mod error;
pub mod template;

// Re-export core types
pub use error::{Result, TemplateError};
pub use template::{Template, TemplateId, Templates, decode, decode_collection, encode};

/// Get the library version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
