use chrono::Utc;
use uuid::Uuid;

use crate::domain::record::UserRecord;
use crate::infrastructure::storage::{KeyValueStorage, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to write user records: {0}")]
    StorageWriteFailure(#[source] StorageError),
    #[error("failed to serialize user records: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("user {0} does not exist")]
    UnknownId(String),
}

/// Durable collection of [`UserRecord`]s kept under a single storage key.
///
/// The whole collection is read and rewritten on every call; nothing is
/// cached between calls, so the storage slot stays the only source of truth.
pub struct UserRepository<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> UserRepository<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Reads every record. A missing slot, an unreadable medium or a payload
    /// that does not parse all yield an empty collection.
    pub fn list_all(&self) -> Vec<UserRecord> {
        let payload = match self.storage.get(&self.key) {
            Ok(Some(payload)) => payload,
            Ok(None) => return vec![],
            Err(e) => {
                log::warn!("Failed to read user records from storage: {e}");
                return vec![];
            }
        };

        match serde_json::from_str(&payload) {
            Ok(records) => records,
            Err(e) => {
                log::warn!("Stored user records are malformed, treating as empty: {e}");
                vec![]
            }
        }
    }

    pub fn get_by_id(&self, id: &str) -> Option<UserRecord> {
        self.list_all()
            .into_iter()
            .find(|record| record.id() == Some(id))
    }

    /// Creates the record when it carries no id, otherwise replaces the entry
    /// with the same id in place. Returns the record as persisted.
    ///
    /// Ids are only ever assigned here, so a record whose id matches no entry
    /// is rejected with [`StoreError::UnknownId`] and nothing is written.
    pub fn save(&mut self, record: UserRecord) -> Result<UserRecord, StoreError> {
        let mut records = self.list_all();
        let mut record = record.normalized();

        match record.id().map(str::to_owned) {
            Some(id) => match records.iter().position(|r| r.id() == Some(id.as_str())) {
                Some(index) => records[index] = record.clone(),
                None => return Err(StoreError::UnknownId(id)),
            },
            None => {
                record.id = Some(generate_id(&records));
                records.push(record.clone());
            }
        }

        self.write(&records)?;
        log::debug!("Saved user {:?}", record.id);
        Ok(record)
    }

    /// Removes every entry with the given id. Returns `false` only when the
    /// medium rejected the write; an unknown id is reported as success.
    pub fn delete_by_id(&mut self, id: &str) -> bool {
        let records: Vec<UserRecord> = self
            .list_all()
            .into_iter()
            .filter(|record| record.id() != Some(id))
            .collect();

        match self.write(&records) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Failed to delete user {id}: {e}");
                false
            }
        }
    }

    pub fn clear_all(&mut self) {
        if let Err(e) = self.storage.remove(&self.key) {
            log::error!("Failed to clear user records: {e}");
        }
    }

    fn write(&mut self, records: &[UserRecord]) -> Result<(), StoreError> {
        let payload = serde_json::to_string(records)?;
        self.storage
            .set(&self.key, &payload)
            .map_err(StoreError::StorageWriteFailure)
    }
}

/// Builds `user_<millis>_<random>`, retrying on the unlikely clash with an
/// id already in `records`.
fn generate_id(records: &[UserRecord]) -> String {
    loop {
        let random = Uuid::new_v4().simple().to_string();
        let id = format!("user_{}_{}", Utc::now().timestamp_millis(), &random[..9]);
        if !records.iter().any(|record| record.id() == Some(id.as_str())) {
            return id;
        }
    }
}
