//! Storage abstraction for template records

use appcreator::{Template, TemplateId, Templates};
use async_trait::async_trait;

use crate::error::Result;

pub mod memory_storage;

pub use memory_storage::MemoryStorage;

// SQLite implementation
#[cfg(feature = "sqlite")]
pub mod sqlite_storage;

/// Kind under which template records are grouped in a document store
pub const DEFAULT_KIND: &str = "Template";

/// Capability every template backend provides
///
/// Implementations must be safe to share between concurrent requests.
/// Per-key atomicity of `put` is the backend's responsibility.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// List every stored template. An empty store yields an empty collection.
    async fn get_all(&self) -> Result<Templates>;

    /// Fetch a single template by key
    async fn get_by_id(&self, id: &TemplateId) -> Result<Template>;

    /// Insert or overwrite the template keyed by `template.id`, returning the key
    async fn put(&self, template: &Template) -> Result<TemplateId>;
}
