use super::KvStore;
use crate::error::{Result, StackError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// On-disk document. Kept as a named struct so the file shape stays stable
/// if fields are added later.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    entries: HashMap<String, i64>,
}

/// JSON-file-backed key-value store.
///
/// The whole map lives in one JSON file which is rewritten atomically
/// (write to a tmp file, then rename) on every mutation. Opening a store
/// over an existing file reloads it, which is what lets a stack recover its
/// last top value after a restart via `reset`.
pub struct JsonFileStore {
    path: PathBuf,
    entries: HashMap<String, i64>,
}

impl JsonFileStore {
    /// Open a store at `path`, loading it if the file already exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let file: StoreFile = serde_json::from_str(&content)?;
            file.entries
        } else {
            HashMap::new()
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current value for `key`, if any. Inspection helper.
    pub fn get(&self, key: &str) -> Option<i64> {
        self.entries.get(key).copied()
    }

    fn persist(&self) -> Result<()> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let content = serde_json::to_string_pretty(&StoreFile {
            entries: self.entries.clone(),
        })?;

        // Atomic write: tmp file in the same directory, then rename.
        let tmp = dir.join(format!(".store-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KvStore for JsonFileStore {
    fn create(&mut self, key: &str, value: i64) -> Result<()> {
        if self.entries.contains_key(key) {
            return Err(StackError::Store(format!(
                "create over existing key: {key}"
            )));
        }
        self.entries.insert(key.to_string(), value);
        self.persist()
    }

    fn update(&mut self, key: &str, value: i64) -> Result<()> {
        if !self.entries.contains_key(key) {
            return Err(StackError::KeyNotFound(key.to_string()));
        }
        self.entries.insert(key.to_string(), value);
        self.persist()
    }

    fn read(&self, key: &str) -> Result<i64> {
        self.entries
            .get(key)
            .copied()
            .ok_or_else(|| StackError::KeyNotFound(key.to_string()))
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_none() {
            return Err(StackError::KeyNotFound(key.to_string()));
        }
        self.persist()
    }
}
