use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::warn;

/// Storage key for the bearer token.
pub const ACCESS_TOKEN_KEY: &str = "access_token";
/// Storage key for the serialized current user.
pub const USER_KEY: &str = "user";
/// Storage key for the deep link to restore after login.
pub const REDIRECT_AFTER_LOGIN_KEY: &str = "redirectAfterLogin";

/// Durable client-side key/value storage. Synchronous on purpose: the
/// semantics mirror browser localStorage, and every value is tiny.
pub trait Storage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// One file per key under a root directory.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)
            .map_err(|e| Error::Storage(format!("Cannot create storage dir {}: {}", root.display(), e)))?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are fixed identifiers, but keep the filename safe anyway.
        let safe: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.root.join(safe)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path_for(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::write(self.path_for(key), value) {
            warn!(key, error = %e, "Failed to persist storage key");
        }
    }

    fn remove(&self, key: &str) {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(key, error = %e, "Failed to remove storage key"),
        }
    }
}

/// In-memory storage for tests.
#[derive(Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.lock().unwrap().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.values.lock().unwrap().remove(key);
    }
}
