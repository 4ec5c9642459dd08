//! Persistent key-value store port.
//!
//! Values are JSON text. The typed helpers [`read_json`] and [`write_json`]
//! keep encoding rules in one place for every caller.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::ports::errors::PersistenceError;
use crate::storage_key::StorageKey;

/// Opaque get/set/remove of named values.
///
/// 持久化键值存储端口。
#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// Read a value. A missing key is `Ok(None)`.
    ///
    /// 读取值，不存在时返回 `Ok(None)`。
    async fn get(&self, key: StorageKey) -> Result<Option<String>, PersistenceError>;

    /// Write a value, replacing any previous one.
    ///
    /// 写入值（覆盖旧值）。
    async fn set(&self, key: StorageKey, value: &str) -> Result<(), PersistenceError>;

    /// Remove a value. Removing a missing key succeeds.
    ///
    /// 删除值，键不存在时视为成功。
    async fn remove(&self, key: StorageKey) -> Result<(), PersistenceError>;
}

/// Read and decode a JSON value.
pub async fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStorePort,
    key: StorageKey,
) -> Result<Option<T>, PersistenceError> {
    let Some(raw) = store.get(key).await? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| PersistenceError::Decode {
            key,
            message: e.to_string(),
        })
}

/// Encode and write a JSON value.
pub async fn write_json<T: Serialize + Sync>(
    store: &dyn KeyValueStorePort,
    key: StorageKey,
    value: &T,
) -> Result<(), PersistenceError> {
    let raw = serde_json::to_string(value).map_err(|e| PersistenceError::Encode {
        key,
        message: e.to_string(),
    })?;
    store.set(key, &raw).await
}
