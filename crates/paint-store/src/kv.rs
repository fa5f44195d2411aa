//! Key-value backends.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use crate::error::{Result, StoreError};

/// A process-wide string store addressed by key.
///
/// Values are whole documents: callers read a key once and rewrite it in
/// full on every change.
pub trait KeyValueStore {
    /// Value under `key`, or `None` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store. Contents are lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Directory-backed store: one `<key>.json` file per key.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// File that holds `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => {
                tracing::debug!("Read {} from {}", key, path.display());
                Ok(Some(content))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Io {
                operation: "read",
                path,
                source: e,
            }),
        }
    }

    /// Writes go to a temp file that is renamed over the target, so a crash
    /// leaves either the old or the new document.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let temp_path = path.with_extension("json.tmp");

        fs::create_dir_all(&self.root).map_err(|e| StoreError::Io {
            operation: "create directory",
            path: self.root.clone(),
            source: e,
        })?;

        let mut file = File::create(&temp_path).map_err(|e| StoreError::Io {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(value.as_bytes())
            .map_err(|e| StoreError::Io {
                operation: "write",
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| StoreError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, &path).map_err(|e| StoreError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: path.clone(),
            source: e,
        })?;

        tracing::debug!("Wrote {} to {}", key, path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert_eq!(store.get("paintHistory").unwrap(), None);
    }

    #[test]
    fn set_creates_directory_and_round_trips() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested"));
        store.set("savedPalettes", "[]").unwrap();
        assert_eq!(store.get("savedPalettes").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("nested/savedPalettes.json").exists());
        assert!(!dir.path().join("nested/savedPalettes.json.tmp").exists());
    }

    #[test]
    fn rejects_path_like_keys() {
        let store = JsonFileStore::new("unused");
        assert!(matches!(
            store.path_for("../escape"),
            Err(StoreError::InvalidKey(_))
        ));
        assert!(store.path_for("").is_err());
    }
}
