//! Template records and their JSON codec

use std::fmt;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::error::{Result, TemplateError};

/// Unique identifier for a template, also used as its storage key
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct TemplateId(pub String);

impl From<String> for TemplateId {
    fn from(s: String) -> Self {
        TemplateId(s)
    }
}

impl From<&str> for TemplateId {
    fn from(s: &str) -> Self {
        TemplateId(s.to_string())
    }
}

impl AsRef<str> for TemplateId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A pre-built application layout offered by the template picker
///
/// `template` carries the serialized editor configuration. It is opaque to
/// this crate: never parsed, never validated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Template {
    /// Unique identifier, immutable once assigned
    pub id: TemplateId,

    /// Display label
    pub name: String,

    /// Thumbnail location
    #[serde(rename = "imageURL", alias = "imageUrl")]
    pub image_url: String,

    /// Serialized configuration payload
    pub template: String,
}

impl Template {
    /// Create a new template
    pub fn new(
        id: impl Into<TemplateId>,
        name: impl Into<String>,
        image_url: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        Template {
            id: id.into(),
            name: name.into(),
            image_url: image_url.into(),
            template: template.into(),
        }
    }
}

/// Template collection, in whatever order the store returned it
pub type Templates = Vec<Template>;

/// Encode a template or a collection of templates as JSON
pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(TemplateError::Encode)
}

/// Decode a single template from JSON
pub fn decode(bytes: &[u8]) -> Result<Template> {
    decode_json(bytes)
}

/// Decode a JSON array of templates
pub fn decode_collection(bytes: &[u8]) -> Result<Templates> {
    decode_json(bytes)
}

fn decode_json<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(TemplateError::Decode)
}
