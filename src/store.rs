//! Session persistence — the single-slot key-value seam.
//!
//! The cached session lives in one named slot behind the [`SessionStore`]
//! trait, so the client runs against an in-memory double in tests and a
//! file-backed slot in real deployments. All access is last-write-wins.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

/// Errors produced by session store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying file I/O failed.
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// String key-value storage holding the cached session.
pub trait SessionStore: Send + Sync {
    /// Read the value at `key`. `None` when the slot is empty.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` at `key`, overwriting any prior value.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing storage cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete the value at `key`. Deleting an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing storage cannot be written.
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

// =============================================================================
// MEMORY STORE
// =============================================================================

/// In-memory store for tests and embedded use.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(slots.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.remove(key);
        Ok(())
    }
}

// =============================================================================
// FILE STORE
// =============================================================================

/// File-backed store: each key is one `<key>.json` file under `dir`.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.slot_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::write(self.slot_path(key), value)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.slot_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
