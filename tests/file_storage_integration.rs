use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use userdeck::domain::record::UserRecord;
use userdeck::infrastructure::storage::{FileStorage, KeyValueStorage, StorageError};
use userdeck::repositories::user::{StoreError, UserRepository};

const KEY: &str = "userdeck_users";

fn repository(dir: &TempDir, quota: usize) -> Result<UserRepository<FileStorage>, StorageError> {
    Ok(UserRepository::new(FileStorage::new(dir.path(), quota)?, KEY))
}

#[test]
fn test_records_survive_restart() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let saved = {
        let mut store = repository(&dir, 1024 * 1024)?;
        store.save(UserRecord::new("Ana").with_email("a@x.com"))?;
        store.save(UserRecord::new("Bo").with_category("Partner"))?
    };

    let store = repository(&dir, 1024 * 1024)?;
    let records = store.list_all();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Ana");
    assert_eq!(records[1], saved);

    Ok(())
}

#[test]
fn test_stored_payload_uses_camel_case() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let mut store = repository(&dir, 1024 * 1024)?;
    store.save(UserRecord::new("Ana"))?;

    let payload = fs::read_to_string(dir.path().join(format!("{KEY}.json")))?;
    let value: serde_json::Value = serde_json::from_str(&payload)?;
    let entry = &value[0];
    assert_eq!(entry["name"], "Ana");
    assert_eq!(entry["hasAdditionalDetails"], false);
    assert!(entry["category"].is_null());
    assert!(entry["id"].as_str().is_some_and(|id| id.starts_with("user_")));

    Ok(())
}

#[test]
fn test_corrupted_file_reads_as_empty() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join(format!("{KEY}.json")), "{not json")?;
    let mut store = repository(&dir, 1024 * 1024)?;

    assert!(store.list_all().is_empty());

    // the next save replaces the corrupted payload
    store.save(UserRecord::new("Ana"))?;
    assert_eq!(store.list_all().len(), 1);

    Ok(())
}

#[test]
fn test_quota_rejects_save_and_keeps_data() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let mut store = repository(&dir, 200)?;
    store.save(UserRecord::new("Ana"))?;

    let result = store.save(UserRecord::new("x".repeat(500)));
    assert!(matches!(
        result,
        Err(StoreError::StorageWriteFailure(StorageError::QuotaExceeded { .. }))
    ));
    assert_eq!(store.list_all().len(), 1);

    Ok(())
}

#[test]
fn test_clear_all_removes_file() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let mut store = repository(&dir, 1024 * 1024)?;
    store.save(UserRecord::new("Ana"))?;
    store.clear_all();

    assert!(store.list_all().is_empty());
    assert_eq!(store.storage().get(KEY)?, None);
    assert!(!dir.path().join(format!("{KEY}.json")).exists());

    Ok(())
}

#[test]
fn test_delete_rewrites_collection() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let mut store = repository(&dir, 1024 * 1024)?;
    let ana = store.save(UserRecord::new("Ana"))?;
    let bo = store.save(UserRecord::new("Bo"))?;

    assert!(store.delete_by_id(ana.id().unwrap_or_default()));
    assert_eq!(store.list_all(), vec![bo]);
    assert!(store.delete_by_id("user_missing"));
    assert_eq!(store.list_all().len(), 1);

    Ok(())
}
