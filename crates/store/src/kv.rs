//! The key-value persistence port and its implementations.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::error::StoreError;

/// Well-known storage keys.
pub mod keys {
    /// Provider credential, stored as plain text.
    pub const API_KEY: &str = "replicate_api_key";
    /// UI language preference.
    pub const LANGUAGE: &str = "language";
    /// Serialized history list (JSON array of entries).
    pub const HISTORY: &str = "video_history";
}

/// Minimal synchronous persistence port: string values under named keys.
///
/// All mutations are immediately durable; there is no staging layer. A
/// missing key reads as `None`, and deleting a missing key is a no-op.
pub trait KvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn delete(&self, key: &str) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// File-backed store
// ---------------------------------------------------------------------------

/// One file per key under a root directory.
///
/// Concurrent writers (e.g. two processes sharing the directory) are not
/// coordinated: the last writer wins. That mirrors the browser-storage
/// behaviour this store replaces and is a documented limitation.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    root: PathBuf,
}

impl FileKvStore {
    /// Open (creating if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        std::fs::create_dir_all(&root)
            .map_err(|e| StoreError::Backend(format!("create {}: {e}", root.display())))?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        // Keys are fixed internal names; reject anything path-like outright.
        if key.is_empty() || key.contains(['/', '\\', '.']) {
            return Err(StoreError::Backend(format!("invalid key '{key}'")));
        }
        Ok(self.root.join(key))
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Backend(format!("read {}: {e}", path.display()))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        std::fs::write(&path, value)
            .map_err(|e| StoreError::Backend(format!("write {}: {e}", path.display())))
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Backend(format!(
                "delete {}: {e}",
                path.display()
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// In-memory store (tests, fakes)
// ---------------------------------------------------------------------------

/// Shared in-memory map. Cloning yields a handle to the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryKvStore {
    inner: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.inner.lock().expect("kv lock poisoned").get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.inner
            .lock()
            .expect("kv lock poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.inner.lock().expect("kv lock poisoned").remove(key);
        Ok(())
    }
}
