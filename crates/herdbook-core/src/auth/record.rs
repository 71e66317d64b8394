use thiserror::Error;
use tracing::warn;

use super::Credentials;
use crate::store::{KeyValueStore, StoreError};

/// Store key for the guest flag (`"true"` or absent)
pub const DEMO_MODE_KEY: &str = "demo_mode";

/// Store key for JSON-serialized credentials
pub const CREDENTIALS_KEY: &str = "auth_credentials";

const DEMO_MODE_ON: &str = "true";

/// The persisted marker of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionRecord {
    Guest,
    Credentialed(Credentials),
}

#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Stored session is corrupted: {0}")]
    Corrupted(#[source] serde_json::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A backend that cannot parse its own contents holds corrupted state too
fn read(store: &impl KeyValueStore, key: &str) -> Result<Option<String>, RecordError> {
    store.get(key).map_err(|e| match e {
        StoreError::Serialization(e) => RecordError::Corrupted(e),
        other => RecordError::Store(other),
    })
}

impl SessionRecord {
    /// Read the record. The guest flag wins over credentials, so stale
    /// credentials left behind by a guest login are masked rather than used.
    pub fn load(store: &impl KeyValueStore) -> Result<Option<Self>, RecordError> {
        if read(store, DEMO_MODE_KEY)?.as_deref() == Some(DEMO_MODE_ON) {
            return Ok(Some(SessionRecord::Guest));
        }

        match read(store, CREDENTIALS_KEY)? {
            Some(raw) => {
                let credentials: Credentials =
                    serde_json::from_str(&raw).map_err(RecordError::Corrupted)?;
                Ok(Some(SessionRecord::Credentialed(credentials)))
            }
            None => Ok(None),
        }
    }

    /// Write this record's key. The other key is left as it is.
    pub fn save(&self, store: &impl KeyValueStore) -> Result<(), RecordError> {
        match self {
            SessionRecord::Guest => store.set(DEMO_MODE_KEY, DEMO_MODE_ON)?,
            SessionRecord::Credentialed(credentials) => {
                let raw = serde_json::to_string(credentials).map_err(StoreError::from)?;
                store.set(CREDENTIALS_KEY, &raw)?;
            }
        }
        Ok(())
    }

    /// Remove both keys. Every removal is attempted; failures are logged and
    /// the first one is returned.
    pub fn clear(store: &impl KeyValueStore) -> Result<(), StoreError> {
        let mut first_error = None;
        for key in [CREDENTIALS_KEY, DEMO_MODE_KEY] {
            if let Err(e) = store.remove(key) {
                warn!(key, error = %e, "Failed to remove session key");
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
