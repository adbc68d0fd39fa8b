//! JSON file key-value store
//!
//! All keys live in one JSON object; every write rewrites the file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::KeyValueStore;
use crate::error::{AppError, AppResult};

/// Store persisted to a single JSON file
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store, reading existing entries if the file exists.
    /// A file that is not a JSON object of strings is logged and treated as empty.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::error!("Ignoring unreadable storage file {}: {}", path.display(), e);
                BTreeMap::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        tracing::debug!("Opened storage file {} ({} keys)", path.display(), entries.len());

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> AppResult<()> {
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| AppError::Storage("file store lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| AppError::Storage("file store lock poisoned".to_string()))?;
        // the in-memory copy only changes once the file write succeeded
        let mut updated = entries.clone();
        updated.insert(key.to_string(), value.to_string());
        self.write(&updated)?;
        *entries = updated;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "farm-assistant-{}-{}.json",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_values_survive_reopen() {
        let path = temp_path("reopen");
        let _ = fs::remove_file(&path);

        let store = FileStore::open(&path).unwrap();
        store.set("preferredLanguage", "hi").unwrap();
        store.set("cropData", "[]").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get("preferredLanguage").unwrap().as_deref(), Some("hi"));
        assert_eq!(reopened.get("cropData").unwrap().as_deref(), Some("[]"));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_failed_write_is_not_visible() {
        let dir = std::env::temp_dir().join(format!("farm-assistant-missing-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        let store = FileStore::open(dir.join("storage.json")).unwrap();

        assert!(store.set("preferredLanguage", "hi").is_err());
        assert_eq!(store.get("preferredLanguage").unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_opens_empty() {
        let path = temp_path("corrupt");
        fs::write(&path, "{not json").unwrap();

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("cropData").unwrap(), None);

        fs::remove_file(&path).unwrap();
    }
}
