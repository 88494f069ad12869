//! Durable key-value storage for progress mappings.
//!
//! Each key is stored as its own JSON file, `<data_dir>/<key>.json`.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Storage key for the completed-topics mapping.
pub const COMPLETED_TOPICS_KEY: &str = "completed-topics";

/// Storage key for the checklist completion mapping.
pub const CHECKLIST_PROGRESS_KEY: &str = "checklist-progress";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage I/O failed for {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("stored value for '{key}' is not valid JSON: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode value for '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Client-local durable string storage.
pub trait KeyValueStore {
    /// Raw stored value, `None` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// id → done mapping, kept sorted so the persisted JSON is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionMap(BTreeMap<String, bool>);

impl CompletionMap {
    pub fn is_set(&self, id: &str) -> bool {
        self.0.get(id).copied().unwrap_or(false)
    }

    pub fn set(&mut self, id: &str, value: bool) {
        self.0.insert(id.to_string(), value);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of ids currently set to `true`.
    #[allow(dead_code)]
    pub fn count_set(&self) -> usize {
        self.0.values().filter(|v| **v).count()
    }

    /// Decode the mapping stored under `key`. An absent key is an empty map.
    pub fn load(store: &dyn KeyValueStore, key: &str) -> Result<Self, StorageError> {
        match store.get(key)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|source| StorageError::Decode {
                key: key.to_string(),
                source,
            }),
            None => Ok(Self::default()),
        }
    }

    pub fn save(&self, store: &mut dyn KeyValueStore, key: &str) -> Result<(), StorageError> {
        let raw = serde_json::to_string(self).map_err(|source| StorageError::Encode {
            key: key.to_string(),
            source,
        })?;
        store.set(key, &raw)
    }
}

impl FromIterator<(String, bool)> for CompletionMap {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Stores each key as a JSON file inside a data directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// The directory is created lazily on the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = std::fs::read_to_string(&path).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;
        debug!("Read {} bytes from {:?}", raw.len(), path);
        Ok(Some(raw))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| StorageError::Io {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.path_for(key);
        std::fs::write(&path, value).map_err(|source| StorageError::Io {
            path: path.clone(),
            source,
        })?;
        debug!("Saved {:?}", path);
        Ok(())
    }
}
