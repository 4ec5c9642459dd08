use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use ev_core::ports::{KeyValueStorePort, PersistenceError};
use ev_core::StorageKey;

/// Process-local store for tests and ephemeral runs.
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    values: RwLock<HashMap<StorageKey, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.values.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.values.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStorePort for InMemoryKeyValueStore {
    async fn get(&self, key: StorageKey) -> Result<Option<String>, PersistenceError> {
        Ok(self.values.read().await.get(&key).cloned())
    }

    async fn set(&self, key: StorageKey, value: &str) -> Result<(), PersistenceError> {
        self.values.write().await.insert(key, value.to_string());
        Ok(())
    }

    async fn remove(&self, key: StorageKey) -> Result<(), PersistenceError> {
        self.values.write().await.remove(&key);
        Ok(())
    }
}
