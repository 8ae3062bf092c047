//! Startup seeding of the template catalogue

use std::path::Path;

use appcreator_store::TemplateStore;
use tracing::info;

use crate::error::{ApiError, Result};

/// Upsert every template from a JSON array file, returning how many were written
pub async fn seed_templates(store: &dyn TemplateStore, path: &Path) -> Result<usize> {
    let bytes = tokio::fs::read(path).await?;
    let templates = appcreator::decode_collection(&bytes)?;

    for template in &templates {
        store
            .put(template)
            .await
            .map_err(|e| ApiError::store("Failed to seed template", e))?;
    }

    info!("Seeded {} templates from {}", templates.len(), path.display());
    Ok(templates.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use appcreator_store::MemoryStorage;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_seed_upserts_each_template() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("templates.json");
        std::fs::write(
            &path,
            r#"[
                {"id":"left-side-panel","name":"Left Side Panel","imageUrl":"left-panel.png","template":"{}"},
                {"id":"four-maps","name":"Four Maps","imageURL":"four-maps.png","template":"{}"}
            ]"#,
        )
        .unwrap();

        let store = MemoryStorage::new();
        let written = seed_templates(&store, &path).await.unwrap();

        assert_eq!(written, 2);
        let panel = store.get_by_id(&"left-side-panel".into()).await.unwrap();
        assert_eq!(panel.image_url, "left-panel.png");
    }

    #[tokio::test]
    async fn test_seed_rejects_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("templates.json");
        std::fs::write(&path, r#"{"id":"not-an-array"}"#).unwrap();

        let store = MemoryStorage::new();
        let result = seed_templates(&store, &path).await;

        assert!(matches!(result, Err(ApiError::BadRequest(_))));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_bundled_catalogue_seeds() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../seed/templates.json");

        let store = MemoryStorage::new();
        let written = seed_templates(&store, &path).await.unwrap();

        assert_eq!(written, store.len());
        assert!(store.get_by_id(&"two-maps".into()).await.is_ok());
    }

    #[tokio::test]
    async fn test_seed_missing_file() {
        let store = MemoryStorage::new();
        let result = seed_templates(&store, Path::new("/nonexistent/templates.json")).await;

        assert!(matches!(result, Err(ApiError::Io(_))));
    }
}
