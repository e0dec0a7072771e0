//! Mirroring application state into a key-value byte store.
//!
//! Each collection and the settings object live under their own key as
//! UTF-8 JSON. Loading never fails: a missing or unreadable key falls back to
//! the caller's seed value.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{EstacionError, EstacionResult};

/// Durable key-value byte store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> EstacionResult<Option<Vec<u8>>>;
    fn set(&mut self, key: &str, value: &[u8]) -> EstacionResult<()>;
    fn remove(&mut self, key: &str) -> EstacionResult<()>;
}

/// One `<key>.json` file per key inside a data directory.
#[derive(Debug, Clone)]
pub struct DirStore {
    dir: PathBuf,
}

impl DirStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        DirStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> EstacionResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(EstacionError::Storage(format!("Invalid storage key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for DirStore {
    fn get(&self, key: &str) -> EstacionResult<Option<Vec<u8>>> {
        let path = self.path_for(key)?;
        match std::fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &[u8]) -> EstacionResult<()> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;

        let temp = self.dir.join(format!("{}.json.tmp", key));
        std::fs::write(&temp, value)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> EstacionResult<()> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-process store; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> EstacionResult<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> EstacionResult<()> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> EstacionResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Read and decode `key`, or build the fallback when it is absent or unreadable.
pub fn load_or<T, K, F>(kv: &K, key: &str, fallback: F) -> T
where
    T: DeserializeOwned,
    K: KeyValueStore + ?Sized,
    F: FnOnce() -> T,
{
    match kv.get(key) {
        Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Stored value is unreadable, using defaults");
                fallback()
            }
        },
        Ok(None) => {
            tracing::debug!(key, "Nothing stored yet, using defaults");
            fallback()
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "Could not read from storage, using defaults");
            fallback()
        }
    }
}

/// Encode `value` as JSON and write it under `key`.
pub fn save<T, K>(kv: &mut K, key: &str, value: &T) -> EstacionResult<()>
where
    T: Serialize + ?Sized,
    K: KeyValueStore + ?Sized,
{
    let bytes = serde_json::to_vec_pretty(value)?;
    kv.set(key, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_falls_back_when_missing() {
        let kv = MemoryStore::new();
        let value: Vec<u32> = load_or(&kv, "numbers", || vec![7]);
        assert_eq!(value, vec![7]);
    }

    #[test]
    fn load_falls_back_when_unparseable() {
        let mut kv = MemoryStore::new();
        kv.set("numbers", b"{not json").unwrap();

        let value: Vec<u32> = load_or(&kv, "numbers", Vec::new);
        assert!(value.is_empty());
    }

    #[test]
    fn save_then_load_through_memory() {
        let mut kv = MemoryStore::new();
        save(&mut kv, "numbers", &vec![1, 2, 3]).unwrap();

        let value: Vec<u32> = load_or(&kv, "numbers", Vec::new);
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[test]
    fn dir_store_writes_one_file_per_key() {
        let tmp = tempfile::tempdir().unwrap();
        let mut kv = DirStore::new(tmp.path().join("data"));

        assert_eq!(kv.get("settings").unwrap(), None);
        kv.set("settings", br#"{"a":1}"#).unwrap();

        let path = tmp.path().join("data/settings.json");
        assert!(path.exists());
        assert!(!tmp.path().join("data/settings.json.tmp").exists());
        assert_eq!(kv.get("settings").unwrap().unwrap(), br#"{"a":1}"#.to_vec());

        kv.remove("settings").unwrap();
        kv.remove("settings").unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn dir_store_rejects_path_like_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let kv = DirStore::new(tmp.path());

        assert!(matches!(
            kv.get("../escape"),
            Err(EstacionError::Storage(_))
        ));
    }
}
