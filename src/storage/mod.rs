use crate::models::Note;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub(crate) const DEFAULT_NOTES_KEY: &str = "desktop-notes";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("failed to read `{key}` from storage")]
    Read { key: String },

    #[error("failed to write `{key}` to storage")]
    Write { key: String },

    #[error("failed to encode notes: {0}")]
    Encode(String),
}

/// String key/value store the notes are mirrored into.
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, resolved on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }

    /// Whether the host exposes local storage at all.
    pub fn is_available() -> bool {
        cfg!(target_arch = "wasm32") && Self::storage().is_ok()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?.get_item(key).map_err(|_| StorageError::Read {
            key: key.to_string(),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|_| StorageError::Write {
                key: key.to_string(),
            })
    }
}

/// In-process store. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let s = Self::new();
        if let Ok(mut items) = s.items.lock() {
            items.insert(key.to_string(), value.to_string());
        }
        s
    }

    /// Raw stored value, bypassing the trait.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.lock().ok()?.get(key).cloned()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().map_err(|_| StorageError::Read {
            key: key.to_string(),
        })?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|_| StorageError::Write {
            key: key.to_string(),
        })?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads and writes the whole note list under a single key.
#[derive(Clone)]
pub struct NoteStore {
    key: String,
    backend: Arc<dyn KeyValueStore>,
}

impl NoteStore {
    pub fn new(key: impl Into<String>, backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            key: key.into(),
            backend,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Stored notes, or an empty list when nothing usable is stored.
    ///
    /// Malformed or non-array values are logged and dropped; this never fails.
    pub fn load(&self) -> Vec<Note> {
        let json = match self.backend.get_item(&self.key) {
            Ok(Some(json)) => json,
            Ok(None) => return vec![],
            Err(err) => {
                log::error!("Failed to load notes: {err}");
                return vec![];
            }
        };

        if json.is_empty() {
            return vec![];
        }

        match serde_json::from_str::<Vec<Note>>(&json) {
            Ok(notes) => notes,
            Err(err) => {
                log::error!("Failed to load notes from `{}`: {err}", self.key);
                vec![]
            }
        }
    }

    /// Overwrites the stored list with `notes`.
    pub fn save(&self, notes: &[Note]) -> Result<(), StorageError> {
        let json = serde_json::to_string(notes).map_err(|e| StorageError::Encode(e.to_string()))?;
        self.backend.set_item(&self.key, &json)
    }
}
