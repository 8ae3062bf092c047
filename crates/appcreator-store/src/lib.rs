//! # App Creator Store
//!
//! Persistence for app creator templates. Every backend implements the
//! narrow [`TemplateStore`] capability:
//! - `get_all` lists every template of the configured kind
//! - `get_by_id` fetches one template by key
//! - `put` upserts a template keyed by its id (last writer wins)
//!
//! Each call is a single backend round trip. There is no caching and no retry.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use appcreator::Template;
//! use appcreator_store::{MemoryStorage, TemplateStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MemoryStorage::new();
//!
//! let key = store
//!     .put(&Template::new("two-maps", "Two Maps", "two-map.png", "{}"))
//!     .await?;
//!
//! let template = store.get_by_id(&key).await?;
//! println!("Stored {} ({})", template.name, key);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod storage;

pub use error::{Result, StoreError};
pub use storage::{DEFAULT_KIND, MemoryStorage, TemplateStore};

#[cfg(feature = "sqlite")]
pub use storage::sqlite_storage::SqliteStorage;
