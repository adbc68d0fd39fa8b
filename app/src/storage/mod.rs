//! Durable key-value storage
//!
//! A flat string-to-string store. Writes overwrite the whole value for a key
//! (last write wins) and complete before the call returns.

mod file;
mod memory;

use std::sync::Arc;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::config::{StorageBackend, StorageConfig};
use crate::error::AppResult;

/// Key holding the serialized crop record sequence
pub const CROP_DATA_KEY: &str = "cropData";

/// Key holding the chosen language code
pub const PREFERRED_LANGUAGE_KEY: &str = "preferredLanguage";

/// Flat key-value storage
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> AppResult<()>;
}

/// Storage handle shared by the components that persist state
pub type SharedStore = Arc<dyn KeyValueStore>;

/// Open the store selected by configuration
pub fn open(config: &StorageConfig) -> AppResult<SharedStore> {
    match config.backend {
        StorageBackend::Memory => Ok(Arc::new(MemoryStore::new())),
        StorageBackend::File => Ok(Arc::new(FileStore::open(&config.path)?)),
    }
}
