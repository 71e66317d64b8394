//! Persistent key-value storage for the session record.
//!
//! The session manager only needs three string operations (`get`, `set`,
//! `remove`), so every backend implements the small `KeyValueStore` trait:
//!
//! - `MemoryStore`: process-local map, used by tests and embedders
//! - `FileStore`: a JSON file in the user cache directory (the default)
//! - `KeyringStore`: one OS keychain entry per key
//!
//! Writes are last-write-wins; no backend offers multi-key atomicity.

pub mod file;
pub mod keychain;
pub mod memory;

use std::path::PathBuf;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use self::file::FileStore;
pub use self::keychain::KeyringStore;
pub use self::memory::MemoryStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store contents could not be (de)serialized: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Keychain error: {0}")]
    Keychain(#[from] keyring::Error),

    #[error("Store lock poisoned")]
    Poisoned,
}

/// Durable string key-value storage that survives restarts.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// Which backend holds the session record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    File,
    Keyring,
    Memory,
}

/// Open the configured backend. `cache_dir` is only used by the file store.
pub fn open(kind: StoreKind, cache_dir: PathBuf) -> Box<dyn KeyValueStore> {
    match kind {
        StoreKind::File => Box::new(FileStore::new(cache_dir)),
        StoreKind::Keyring => Box::new(KeyringStore::new()),
        StoreKind::Memory => Box::new(MemoryStore::new()),
    }
}
