//! Score store backends.
//!
//! Every backend keeps named collections of [`ScoreRecord`]s and only ever
//! appends to them. Appends are not retried; callers surface the error and
//! let the player try again.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::{debug, info};
use serde_json::{Map, Value};

use crate::error::{Result, StoreError};
use crate::record::ScoreRecord;

/// Append-only keyed collections of score records.
pub trait ScoreStore {
    /// Append `record` to the collection named `key`, creating it if needed.
    fn append(&self, key: &str, record: &ScoreRecord) -> Result<()>;

    /// All records of the collection in insertion order (empty if missing).
    fn load(&self, key: &str) -> Result<Vec<ScoreRecord>>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for &S {
    fn append(&self, key: &str, record: &ScoreRecord) -> Result<()> {
        (**self).append(key, record)
    }

    fn load(&self, key: &str) -> Result<Vec<ScoreRecord>> {
        (**self).load(key)
    }
}

impl<S: ScoreStore + ?Sized> ScoreStore for Box<S> {
    fn append(&self, key: &str, record: &ScoreRecord) -> Result<()> {
        (**self).append(key, record)
    }

    fn load(&self, key: &str) -> Result<Vec<ScoreRecord>> {
        (**self).load(key)
    }
}

/// A JSON object on disk mapping collection keys to record arrays.
///
/// ```text
/// { "@scores": [ { "name": "ada", "matrix": "4x4", ... }, ... ] }
/// ```
///
/// Unknown keys are preserved on rewrite. Writes go to a sibling temp file
/// that is renamed over the target.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn read_root(&self) -> Result<Map<String, Value>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(self.io_err(e)),
        };
        if text.trim().is_empty() {
            return Ok(Map::new());
        }
        serde_json::from_str(&text).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn write_root(&self, root: &Map<String, Value>) -> Result<()> {
        let text = serde_json::to_string_pretty(root).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
        }
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, text).map_err(|e| self.io_err(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_err(e))?;
        Ok(())
    }
}

impl ScoreStore for JsonFileStore {
    fn append(&self, key: &str, record: &ScoreRecord) -> Result<()> {
        let mut root = self.read_root()?;
        let value = serde_json::to_value(record).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        match root
            .entry(key.to_string())
            .or_insert_with(|| Value::Array(Vec::new()))
        {
            Value::Array(items) => items.push(value),
            _ => return Err(StoreError::Corrupt { key: key.to_string() }),
        }

        self.write_root(&root)?;
        info!(
            "saved score {} for {:?} to {}",
            record.score,
            record.name,
            self.path.display()
        );
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Vec<ScoreRecord>> {
        let mut root = self.read_root()?;
        let Some(value) = root.remove(key) else {
            debug!("no {key} collection in {}", self.path.display());
            return Ok(Vec::new());
        };
        if !value.is_array() {
            return Err(StoreError::Corrupt { key: key.to_string() });
        }
        serde_json::from_value(value).map_err(|source| StoreError::Record {
            key: key.to_string(),
            source,
        })
    }
}

/// Process-local store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<ScoreRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn append(&self, key: &str, record: &ScoreRecord) -> Result<()> {
        let mut collections = self
            .collections
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))?;
        collections
            .entry(key.to_string())
            .or_default()
            .push(record.clone());
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Vec<ScoreRecord>> {
        let collections = self
            .collections
            .lock()
            .map_err(|_| StoreError::Unavailable("memory store lock poisoned".to_string()))?;
        Ok(collections.get(key).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GameConfig, SCORES_COLLECTION_KEY};

    fn record(name: &str, score: u32) -> ScoreRecord {
        ScoreRecord::new(name, &GameConfig::new(4, 4, 2, "medium"), score, "d")
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("scores.json"));
        assert!(store.load(SCORES_COLLECTION_KEY).unwrap().is_empty());
    }

    #[test]
    fn test_file_store_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("scores.json");
        let store = JsonFileStore::new(&path);

        store.append(SCORES_COLLECTION_KEY, &record("a", 10)).unwrap();
        store.append(SCORES_COLLECTION_KEY, &record("b", 8)).unwrap();

        let loaded = store.load(SCORES_COLLECTION_KEY).unwrap();
        assert_eq!(loaded, vec![record("a", 10), record("b", 8)]);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_file_store_keeps_other_collections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, r#"{"@settings": {"sound": false}}"#).unwrap();
        let store = JsonFileStore::new(&path);

        store.append(SCORES_COLLECTION_KEY, &record("a", 3)).unwrap();

        let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["@settings"]["sound"], Value::Bool(false));
        assert_eq!(raw[SCORES_COLLECTION_KEY][0]["name"], "a");
    }

    #[test]
    fn test_file_store_rejects_non_array_collection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, r#"{"@scores": 5}"#).unwrap();
        let store = JsonFileStore::new(&path);

        assert!(matches!(
            store.append(SCORES_COLLECTION_KEY, &record("a", 1)),
            Err(StoreError::Corrupt { .. })
        ));
        assert!(matches!(
            store.load(SCORES_COLLECTION_KEY),
            Err(StoreError::Corrupt { .. })
        ));
    }

    #[test]
    fn test_file_store_malformed_record_keeps_cause() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, r#"{"@scores": [{"name": "a", "score": "ten"}]}"#).unwrap();
        let store = JsonFileStore::new(&path);

        let err = store.load(SCORES_COLLECTION_KEY).unwrap_err();
        match &err {
            StoreError::Record { key, source } => {
                assert_eq!(key, SCORES_COLLECTION_KEY);
                assert!(!source.to_string().is_empty());
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("malformed score record"));
    }

    #[test]
    fn test_file_store_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "not json").unwrap();
        let store = JsonFileStore::new(&path);

        let err = store.append(SCORES_COLLECTION_KEY, &record("a", 1)).unwrap_err();
        assert!(matches!(err, StoreError::Json { .. }));
        // File left as it was.
        assert_eq!(fs::read_to_string(&path).unwrap(), "not json");
    }

    #[test]
    fn test_file_store_unwritable_path() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be.
        let store = JsonFileStore::new(dir.path());
        let err = store.append(SCORES_COLLECTION_KEY, &record("a", 1)).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        store.append("k", &record("a", 1)).unwrap();
        store.append("k", &record("b", 2)).unwrap();
        store.append("other", &record("c", 3)).unwrap();
        assert_eq!(store.load("k").unwrap().len(), 2);
        assert_eq!(store.load("other").unwrap(), vec![record("c", 3)]);
        assert!(store.load("missing").unwrap().is_empty());
    }

    #[test]
    fn test_store_through_reference_and_box() {
        let store = MemoryStore::new();
        let by_ref: &dyn ScoreStore = &store;
        by_ref.append("k", &record("a", 1)).unwrap();
        let boxed: Box<dyn ScoreStore> = Box::new(MemoryStore::new());
        boxed.append("k", &record("b", 1)).unwrap();
        assert_eq!(store.load("k").unwrap().len(), 1);
        assert_eq!(boxed.load("k").unwrap().len(), 1);
    }
}
