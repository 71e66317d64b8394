use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{KeyValueStore, StoreError};

/// Session file name in cache directory
const STORE_FILE: &str = "session.json";

/// Keeps every key in a single JSON object on disk. The file is created on
/// first write and deleted again once the last key is removed.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(cache_dir: PathBuf) -> Self {
        Self {
            path: cache_dir.join(STORE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Entries to modify, plus whether an unparsable file was discarded and
    /// must be rewritten even if nothing changes.
    fn load_for_write(&self) -> Result<(BTreeMap<String, String>, bool), StoreError> {
        match self.load() {
            Ok(entries) => Ok((entries, false)),
            Err(StoreError::Serialization(e)) => {
                warn!(path = ?self.path, error = %e, "Discarding unparsable session file");
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if entries.is_empty() {
            if self.path.exists() {
                std::fs::remove_file(&self.path)?;
                debug!(path = ?self.path, "Removed empty session file");
            }
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let (mut entries, _) = self.load_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let (mut entries, reset) = self.load_for_write()?;
        if entries.remove(key).is_some() || reset {
            self.save(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path().join("nested"));
        assert_eq!(store.get("demo_mode").expect("get"), None);
        store.remove("demo_mode").expect("remove on empty store");
        assert!(!store.path().exists());
    }

    #[test]
    fn test_entries_survive_new_instance() {
        let dir = tempfile::tempdir().expect("tempdir");
        let first = FileStore::new(dir.path().to_path_buf());
        first.set("auth_credentials", r#"{"username":"a","password":"b"}"#).expect("set");
        first.set("demo_mode", "true").expect("set");

        let second = FileStore::new(dir.path().to_path_buf());
        assert_eq!(second.get("demo_mode").expect("get").as_deref(), Some("true"));
        assert_eq!(
            second.get("auth_credentials").expect("get").as_deref(),
            Some(r#"{"username":"a","password":"b"}"#)
        );
    }

    #[test]
    fn test_removing_last_key_deletes_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path().to_path_buf());
        store.set("demo_mode", "true").expect("set");
        assert!(store.path().exists());

        store.remove("demo_mode").expect("remove");
        assert!(!store.path().exists());
    }

    #[test]
    fn test_corrupted_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path().to_path_buf());
        std::fs::write(store.path(), "{not json").expect("write");
        assert!(matches!(store.get("demo_mode"), Err(StoreError::Serialization(_))));
    }

    #[test]
    fn test_writes_replace_corrupted_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::new(dir.path().to_path_buf());
        std::fs::write(store.path(), "{garbage").expect("write");

        store.remove("auth_credentials").expect("remove resets file");
        assert!(!store.path().exists());

        std::fs::write(store.path(), "{garbage").expect("write");
        store.set("demo_mode", "true").expect("set resets file");
        assert_eq!(store.get("demo_mode").expect("get").as_deref(), Some("true"));
    }
}
