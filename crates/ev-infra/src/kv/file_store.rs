//! File-based key-value store.
//!
//! Each key is one JSON file, `<dir>/<KEY>.json`. Writes go through a
//! temporary sibling file and a rename, so a reader sees either the previous
//! value or the complete new one.

use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use ev_core::ports::{KeyValueStorePort, PersistenceError};
use ev_core::StorageKey;

pub struct FileKeyValueStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Location of the file backing `key`.
    pub fn path_for(&self, key: StorageKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }

    async fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("create store dir failed: {}", self.dir.display()))
    }

    async fn atomic_write(&self, key: StorageKey, content: &str) -> Result<()> {
        self.ensure_dir().await?;

        let path = self.path_for(key);
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .await
            .with_context(|| format!("write temp value failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &path).await.with_context(|| {
            format!(
                "rename temp value to target failed: {} -> {}",
                tmp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    async fn get(&self, key: StorageKey) -> Result<Option<String>, PersistenceError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::Read {
                key,
                message: format!("{}: {e}", path.display()),
            }),
        }
    }

    async fn set(&self, key: StorageKey, value: &str) -> Result<(), PersistenceError> {
        let _guard = self.write_lock.lock().await;

        self.atomic_write(key, value)
            .await
            .map_err(|e| PersistenceError::Write {
                key,
                message: format!("{e:#}"),
            })?;

        debug!(%key, "value written");
        Ok(())
    }

    async fn remove(&self, key: StorageKey) -> Result<(), PersistenceError> {
        let _guard = self.write_lock.lock().await;

        let path = self.path_for(key);
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(%key, "value removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PersistenceError::Remove {
                key,
                message: format!("{}: {e}", path.display()),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn get_returns_none_when_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().join("store"));

        assert_eq!(store.get(StorageKey::User).await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_creates_dir_and_writes_key_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path().join("nested").join("store"));

        store.set(StorageKey::BiometricEnabled, "true").await.unwrap();

        let path = store.path_for(StorageKey::BiometricEnabled);
        assert!(path.ends_with("BIOMETRIC_ENABLED.json"));
        assert_eq!(fs::read_to_string(&path).await.unwrap(), "true");
        assert!(!path.with_extension("json.tmp").exists());
        assert_eq!(
            store.get(StorageKey::BiometricEnabled).await.unwrap().as_deref(),
            Some("true")
        );
    }

    #[tokio::test]
    async fn set_replaces_previous_value() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        store.set(StorageKey::Language, "\"en\"").await.unwrap();
        store.set(StorageKey::Language, "\"ar\"").await.unwrap();

        assert_eq!(
            store.get(StorageKey::Language).await.unwrap().as_deref(),
            Some("\"ar\"")
        );
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());
        store.set(StorageKey::User, "{}").await.unwrap();

        store.remove(StorageKey::User).await.unwrap();
        store.remove(StorageKey::User).await.unwrap();

        assert_eq!(store.get(StorageKey::User).await.unwrap(), None);
    }

    #[tokio::test]
    async fn keys_are_independent() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());
        store.set(StorageKey::User, "{}").await.unwrap();
        store.set(StorageKey::BiometricEnabled, "true").await.unwrap();

        store.remove(StorageKey::User).await.unwrap();

        assert!(store.get(StorageKey::BiometricEnabled).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn write_into_file_path_reports_key() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "not a dir").await.unwrap();
        let store = FileKeyValueStore::new(&blocker);

        let err = store.set(StorageKey::User, "{}").await.unwrap_err();

        assert!(matches!(err, PersistenceError::Write { .. }));
        assert_eq!(err.key(), StorageKey::User);
    }
}
