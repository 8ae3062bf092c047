//! Integration tests for appcreator-store

use appcreator::{Template, TemplateId};
use appcreator_store::{SqliteStorage, StoreError, TemplateStore};
use tempfile::tempdir;

fn db_url(dir: &tempfile::TempDir) -> String {
    format!("sqlite:{}/test.db", dir.path().display())
}

#[tokio::test]
async fn test_empty_store_lists_nothing() {
    let temp_dir = tempdir().unwrap();
    let storage = SqliteStorage::new(&db_url(&temp_dir)).await.unwrap();

    let templates = storage.get_all().await.unwrap();
    assert!(templates.is_empty());
}

#[tokio::test]
async fn test_put_then_get_by_id() {
    let temp_dir = tempdir().unwrap();
    let storage = SqliteStorage::new(&db_url(&temp_dir)).await.unwrap();

    let template = Template::new(
        "left-drawer-mobile",
        "Left Drawer Mobile",
        "https://storage.googleapis.com/ee-app-creator.appspot.com/left-drawer-mobile.png",
        r#"{"config":{"device":"mobile"},"widgets":{}}"#,
    );

    let key = storage.put(&template).await.unwrap();
    assert_eq!(key, template.id);

    let retrieved = storage.get_by_id(&key).await.unwrap();
    assert_eq!(retrieved, template);
}

#[tokio::test]
async fn test_put_overwrites_existing_id() {
    let temp_dir = tempdir().unwrap();
    let storage = SqliteStorage::new(&db_url(&temp_dir)).await.unwrap();

    storage
        .put(&Template::new("t1", "Original", "a.png", "first"))
        .await
        .unwrap();
    storage
        .put(&Template::new("t1", "Replacement", "b.png", "second"))
        .await
        .unwrap();

    let current = storage.get_by_id(&TemplateId::from("t1")).await.unwrap();
    assert_eq!(current.name, "Replacement");
    assert_eq!(current.template, "second");

    assert_eq!(storage.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_by_id_missing_is_not_found() {
    let temp_dir = tempdir().unwrap();
    let storage = SqliteStorage::new(&db_url(&temp_dir)).await.unwrap();

    let err = storage.get_by_id(&TemplateId::from("missing")).await.unwrap_err();
    assert!(matches!(err, StoreError::NotFound(id) if id == "missing"));
}

#[tokio::test]
async fn test_get_all_returns_every_template() {
    let temp_dir = tempdir().unwrap();
    let storage = SqliteStorage::new(&db_url(&temp_dir)).await.unwrap();

    for id in ["four-maps", "two-maps", "right-side-legend"] {
        storage
            .put(&Template::new(id, id.replace('-', " "), format!("{id}.png"), "{}"))
            .await
            .unwrap();
    }

    let mut ids: Vec<String> = storage
        .get_all()
        .await
        .unwrap()
        .into_iter()
        .map(|t| t.id.0)
        .collect();
    ids.sort();

    assert_eq!(ids, vec!["four-maps", "right-side-legend", "two-maps"]);
}

#[tokio::test]
async fn test_kinds_are_isolated() {
    let temp_dir = tempdir().unwrap();
    let url = db_url(&temp_dir);

    let templates = SqliteStorage::new(&url).await.unwrap();
    let saved = SqliteStorage::with_kind(&url, "SavedTemplate").await.unwrap();
    assert_eq!(saved.kind(), "SavedTemplate");

    saved
        .put(&Template::new("draft-1", "Draft", "", "{}"))
        .await
        .unwrap();

    assert!(templates.get_all().await.unwrap().is_empty());
    assert!(matches!(
        templates.get_by_id(&TemplateId::from("draft-1")).await,
        Err(StoreError::NotFound(_))
    ));
    assert_eq!(saved.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_data_survives_reopen() {
    let temp_dir = tempdir().unwrap();
    let url = db_url(&temp_dir);

    let template = Template::new("t1", "Basic", "http://x/y.png", "{...}");
    {
        let storage = SqliteStorage::new(&url).await.unwrap();
        storage.put(&template).await.unwrap();
    }

    let reopened = SqliteStorage::new(&url).await.unwrap();
    assert_eq!(reopened.get_by_id(&template.id).await.unwrap(), template);
}
