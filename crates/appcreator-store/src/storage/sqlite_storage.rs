//! SQLite template storage implementation
//!
//! Templates are kept document-style: one row per record, keyed by
//! `(kind, name)`, with the encoded template as an opaque blob. Nothing
//! inside the document is indexed.

use std::str::FromStr;

use appcreator::{Template, TemplateId, Templates};
use async_trait::async_trait;
use sqlx::{Row, SqlitePool, sqlite::SqliteConnectOptions};

use super::{DEFAULT_KIND, TemplateStore};
use crate::error::{Result, StoreError};

/// SQLite-based template storage implementation
pub struct SqliteStorage {
    pool: SqlitePool,
    kind: String,
}

impl SqliteStorage {
    /// Open (or create) the database at `database_url`, storing templates under the default kind
    pub async fn new(database_url: &str) -> Result<Self> {
        Self::with_kind(database_url, DEFAULT_KIND).await
    }

    /// Open (or create) the database, storing templates under `kind`
    pub async fn with_kind(database_url: &str, kind: impl Into<String>) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| StoreError::Backend(format!("Invalid database URL: {}", e)))?
            .create_if_missing(true);

        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to connect to SQLite: {}", e)))?;

        let storage = Self {
            pool,
            kind: kind.into(),
        };
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Create SQLite storage from environment variable
    ///
    /// Expects DATABASE_URL environment variable with SQLite connection string
    /// Example: sqlite:./data/appcreator.db
    pub async fn from_env() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:appcreator.db".to_string());

        Self::new(&database_url).await
    }

    /// Kind this storage reads and writes
    pub fn kind(&self) -> &str {
        &self.kind
    }

    async fn init_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS entities (
                kind TEXT NOT NULL,
                name TEXT NOT NULL,
                document BLOB NOT NULL,
                PRIMARY KEY (kind, name)
            )
        "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(format!("Failed to create entities table: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl TemplateStore for SqliteStorage {
    async fn get_all(&self) -> Result<Templates> {
        let rows = sqlx::query("SELECT document FROM entities WHERE kind = ?")
            .bind(&self.kind)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to list templates: {}", e)))?;

        rows.iter()
            .map(|row| {
                let document: Vec<u8> = row.get("document");
                appcreator::decode(&document).map_err(StoreError::from)
            })
            .collect()
    }

    async fn get_by_id(&self, id: &TemplateId) -> Result<Template> {
        let row = sqlx::query("SELECT document FROM entities WHERE kind = ? AND name = ?")
            .bind(&self.kind)
            .bind(id.as_ref())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::RowNotFound => StoreError::NotFound(id.to_string()),
                _ => StoreError::Backend(format!("Failed to get template: {}", e)),
            })?;

        let document: Vec<u8> = row.get("document");
        Ok(appcreator::decode(&document)?)
    }

    async fn put(&self, template: &Template) -> Result<TemplateId> {
        let document = appcreator::encode(template)?;

        sqlx::query("INSERT OR REPLACE INTO entities (kind, name, document) VALUES (?, ?, ?)")
            .bind(&self.kind)
            .bind(template.id.as_ref())
            .bind(document)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to save template: {}", e)))?;

        Ok(template.id.clone())
    }
}
