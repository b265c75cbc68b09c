use dreamlog_core::storage::{AsyncDreamStore, Dream, NewDream, SqliteDreamStore};
use dreamlog_core::transfer::export_json;
use dreamlog_core::DreamError;
use tempfile::TempDir;

fn open_store(dir: &TempDir) -> AsyncDreamStore<SqliteDreamStore> {
    let store =
        SqliteDreamStore::open(dir.path().join("dreams.sqlite3")).expect("open should succeed");
    AsyncDreamStore::new(store)
}

#[tokio::test]
async fn test_async_crud_flow() {
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);

    assert!(store.fetch_all().await.expect("fetch_all").is_empty());

    let created = store
        .create(NewDream::new("2024-06-01", "Ocean").with_content("waves"))
        .await
        .expect("create");
    let edited = Dream {
        title: "Storm".to_string(),
        ..created.clone()
    };
    store.update(edited.clone()).await.expect("update");
    assert_eq!(
        store.get(created.id.clone()).await.expect("get"),
        Some(edited)
    );

    store.delete(created.id.clone()).await.expect("delete");
    store.delete(created.id.clone()).await.expect("delete again");
    assert!(store.get(created.id).await.expect("get").is_none());
}

#[tokio::test]
async fn test_async_import_merges_by_id() {
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);
    let existing = store
        .create(NewDream::new("2024-06-01", "Keep me"))
        .await
        .expect("create");

    let incoming = Dream {
        id: "1".to_string(),
        date: "2024-06-02".to_string(),
        title: "B".to_string(),
        content: String::new(),
    };
    let bytes = export_json(std::slice::from_ref(&incoming)).expect("export");
    let imported = store.import(bytes).await.expect("import");

    assert_eq!(imported, vec![incoming]);
    let all = store.fetch_all().await.expect("fetch_all");
    assert_eq!(all.len(), 2);
    assert!(all.iter().any(|d| d.id == existing.id));
}

#[tokio::test]
async fn test_async_malformed_import_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);

    let err = store
        .import(b"not json".to_vec())
        .await
        .expect_err("import should fail");
    assert!(matches!(err, DreamError::MalformedImport(_)));
}

#[tokio::test]
async fn test_clones_share_the_same_store() {
    let dir = TempDir::new().expect("tempdir");
    let store = open_store(&dir);
    let other = store.clone();

    let created = store
        .create(NewDream::new("2024-06-01", "Shared"))
        .await
        .expect("create");

    assert_eq!(other.fetch_all().await.expect("fetch_all"), vec![created]);
    assert_eq!(
        other.blocking().path(),
        dir.path().join("dreams.sqlite3").as_path()
    );
}
