use std::collections::HashMap;

use super::{KeyValueStorage, StorageError};

/// In-memory storage with the same contract as [`super::FileStorage`].
///
/// A quota can be set to mimic a full medium, and `fail_writes` makes every
/// `set`/`remove` fail so that error paths can be driven from tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
    quota: Option<usize>,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(quota: usize) -> Self {
        Self {
            quota: Some(quota),
            ..Default::default()
        }
    }

    pub fn set_fail_writes(&mut self, fail_writes: bool) {
        self.fail_writes = fail_writes;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn used_bytes_except(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Unavailable("writes disabled".to_string()));
        }
        if let Some(quota) = self.quota {
            let requested = self.used_bytes_except(key) + key.len() + value.len();
            if requested > quota {
                return Err(StorageError::QuotaExceeded { requested, quota });
            }
        }

        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Unavailable("writes disabled".to_string()));
        }

        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_get_absent_key() -> Result<(), StorageError> {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("users")?, None);

        Ok(())
    }

    #[test]
    fn test_set_get_remove() -> Result<(), StorageError> {
        let mut storage = MemoryStorage::new();
        storage.set("users", "[]")?;
        assert_eq!(storage.get("users")?.as_deref(), Some("[]"));

        storage.remove("users")?;
        assert_eq!(storage.get("users")?, None);
        assert!(storage.is_empty());

        Ok(())
    }

    #[test]
    fn test_quota_exceeded() {
        let mut storage = MemoryStorage::with_quota(8);
        let result = storage.set("users", "[1,2,3,4]");
        assert!(matches!(
            result,
            Err(StorageError::QuotaExceeded { quota: 8, .. })
        ));
        assert!(storage.is_empty());
    }

    #[test]
    fn test_quota_counts_replaced_value_once() -> Result<(), StorageError> {
        let mut storage = MemoryStorage::with_quota(10);
        storage.set("k", "123456789")?;
        storage.set("k", "987654321")?;
        assert_eq!(storage.len(), 1);

        Ok(())
    }

    #[test]
    fn test_fail_writes() {
        let mut storage = MemoryStorage::new();
        storage.set_fail_writes(true);
        assert!(storage.set("users", "[]").is_err());
        assert!(storage.remove("users").is_err());
    }
}
