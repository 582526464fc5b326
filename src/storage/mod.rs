//! Key-value storage the persisted collections are written to.
//!
//! Each collection lives under one fixed key as serialized JSON text. The
//! store only moves bytes; encoding is the caller's concern.

mod memory;
mod redb;

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::config::StoreBackend;

pub use self::memory::MemoryStore;
pub use self::redb::RedbStore;

/// File name of the embedded database inside the data directory.
pub const DATABASE_FILE: &str = "munchies.redb";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum StorageError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("io error: {0}")]
    Io(String),
}

/// Byte-oriented key-value store.
pub trait KvStore: Send + Sync {
    /// Get the value for a key. Returns None if the key does not exist.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    /// Set a key-value pair, replacing any previous value.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), StorageError>;

    /// Delete a key. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// Open the backend selected in configuration.
pub fn open(backend: StoreBackend, data_dir: &Path) -> Result<Arc<dyn KvStore>, StorageError> {
    match backend {
        StoreBackend::Memory => Ok(Arc::new(MemoryStore::new())),
        StoreBackend::Redb => {
            std::fs::create_dir_all(data_dir).map_err(|e| StorageError::Io(e.to_string()))?;
            let store = RedbStore::open(&data_dir.join(DATABASE_FILE))?;
            Ok(Arc::new(store))
        }
    }
}
