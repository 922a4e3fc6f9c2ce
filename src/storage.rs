//! Local key-value persistence for the editor text.
//!
//! The editor only ever touches one key, read once when the component is
//! created and written each time the debounce window settles. [`FileStore`]
//! keeps a flat JSON object of string values on disk; [`MemoryStore`] holds
//! the same map in memory for tests and throwaway sessions.

use crate::error::StorageError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Directory under the platform data dir used by [`FileStore::open_default`].
pub const APP_DIR: &str = "emoji-textbox";

/// File name of the default store.
pub const STORE_FILE: &str = "storage.json";

/// A string-to-string key-value store.
pub trait KeyValueStore: Send {
    /// Returns the value for `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// JSON-file backed store.
///
/// Every `set` rewrites the whole file through a temporary sibling and a
/// rename, so a crash mid-write leaves the previous contents in place.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Uses the file at `path`. The file and its parent directory are
    /// created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens `<data_dir>/emoji-textbox/storage.json`.
    pub fn open_default() -> Result<Self, StorageError> {
        let dir = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        Ok(Self::new(dir.join(APP_DIR).join(STORE_FILE)))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    // A corrupt file is replaced rather than blocking every later write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = match self.load() {
            Ok(map) => map,
            Err(StorageError::Json(err)) => {
                tracing::warn!(path = %self.path.display(), error = %err, "discarding corrupt store");
                BTreeMap::new()
            }
            Err(err) => return Err(err),
        };
        map.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        replace_file(&self.path, &serde_json::to_string_pretty(&map)?)?;
        tracing::debug!(path = %self.path.display(), key, "store written");
        Ok(())
    }
}

// Writes through a temporary sibling and renames it over `path`. The
// temporary file is removed again if either step fails.
fn replace_file(path: &Path, contents: &str) -> std::io::Result<()> {
    let tmp = path.with_extension("json.tmp");
    let written = std::fs::write(&tmp, contents).and_then(|()| std::fs::rename(&tmp, path));
    if written.is_err() {
        let _ = std::fs::remove_file(&tmp);
    }
    written
}

/// In-memory store. Clones share the same map, so a test can keep a handle
/// and inspect what the editor wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    map: Arc<Mutex<BTreeMap<String, String>>>,
    writes: Arc<Mutex<Vec<(String, String)>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        if let Ok(mut map) = store.map.lock() {
            map.insert(key.to_string(), value.to_string());
        }
        store
    }

    /// Every `set` call made so far, in order.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self
            .map
            .lock()
            .ok()
            .and_then(|map| map.get(key).cloned()))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if let Ok(mut map) = self.map.lock() {
            map.insert(key.to_string(), value.to_string());
        }
        if let Ok(mut writes) = self.writes.lock() {
            writes.push((key.to_string(), value.to_string()));
        }
        Ok(())
    }
}
