use thiserror::Error;

use crate::storage_key::StorageKey;

/// Persistent key-value store failures.
///
/// 持久化存储错误。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PersistenceError {
    #[error("failed to read {key}: {message}")]
    Read { key: StorageKey, message: String },

    #[error("failed to write {key}: {message}")]
    Write { key: StorageKey, message: String },

    #[error("failed to remove {key}: {message}")]
    Remove { key: StorageKey, message: String },

    #[error("stored value for {key} is malformed: {message}")]
    Decode { key: StorageKey, message: String },

    #[error("failed to encode value for {key}: {message}")]
    Encode { key: StorageKey, message: String },
}

impl PersistenceError {
    pub fn key(&self) -> StorageKey {
        match self {
            Self::Read { key, .. }
            | Self::Write { key, .. }
            | Self::Remove { key, .. }
            | Self::Decode { key, .. }
            | Self::Encode { key, .. } => *key,
        }
    }
}

/// Biometric hardware failures.
///
/// 生物识别硬件错误。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("biometric hardware unavailable: {0}")]
    Unavailable(String),

    #[error("biometric check failed: {0}")]
    Failed(String),
}

/// Auth provider failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthProviderError {
    /// Provider answered with an error; `message` is shown to the user.
    #[error("{message}")]
    Rejected { message: String },

    #[error("auth provider unreachable: {0}")]
    Transport(String),
}

/// Event discovery API failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventsError {
    /// Non-2xx answer; `message` comes from the response body.
    #[error("{message}")]
    Rejected { message: String },

    #[error("events API unreachable: {0}")]
    Transport(String),
}

#[derive(Debug, Error)]
pub enum AppDirsError {
    #[error("system data-local directory is unavailable")]
    DataLocalDirUnavailable,
}
