//! Persisted biometric-unlock opt-in.

use std::sync::Arc;

use tracing::{info, warn};

use ev_core::ports::{read_json, write_json, KeyValueStorePort, PersistenceError};
use ev_core::StorageKey;

/// Reads and writes the `BIOMETRIC_ENABLED` flag.
pub struct BiometricPreference {
    store: Arc<dyn KeyValueStorePort>,
}

impl BiometricPreference {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }

    /// Absent is `false`; only a stored `true` enables.
    pub async fn is_enabled(&self) -> Result<bool, PersistenceError> {
        let flag = read_json::<bool>(self.store.as_ref(), StorageKey::BiometricEnabled).await?;
        Ok(flag == Some(true))
    }

    /// Same as [`is_enabled`](Self::is_enabled) with failures mapped to `false`.
    pub async fn is_enabled_or_default(&self) -> bool {
        match self.is_enabled().await {
            Ok(enabled) => enabled,
            Err(err) => {
                warn!(error = %err, "failed to read biometric flag, treating as disabled");
                false
            }
        }
    }

    pub async fn enable(&self) -> Result<(), PersistenceError> {
        write_json(self.store.as_ref(), StorageKey::BiometricEnabled, &true).await?;
        info!("biometric unlock enabled");
        Ok(())
    }

    pub async fn disable(&self) -> Result<(), PersistenceError> {
        self.store.remove(StorageKey::BiometricEnabled).await?;
        info!("biometric unlock disabled");
        Ok(())
    }
}
