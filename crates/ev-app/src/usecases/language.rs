//! Persisted UI language.

use std::sync::Arc;

use tracing::{info, warn};

use ev_core::locale::{Language, LayoutDirection};
use ev_core::ports::{read_json, write_json, KeyValueStorePort, PersistenceError};
use ev_core::StorageKey;

pub struct LanguagePreference {
    store: Arc<dyn KeyValueStorePort>,
}

impl LanguagePreference {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }

    /// Persisted choice, else the device language if supported, else English.
    pub async fn resolve(&self, device_language: &str) -> Language {
        let persisted = match read_json::<String>(self.store.as_ref(), StorageKey::Language).await {
            Ok(tag) => tag,
            Err(err) => {
                warn!(error = %err, "failed to read language preference");
                None
            }
        };

        if let Some(language) = persisted.as_deref().and_then(Language::from_tag) {
            return language;
        }

        match device_language {
            "ar" => Language::Ar,
            _ => Language::FALLBACK,
        }
    }

    /// Persist `language` and return the direction the shell must lay out in.
    pub async fn change(&self, language: Language) -> Result<LayoutDirection, PersistenceError> {
        write_json(self.store.as_ref(), StorageKey::Language, &language.tag()).await?;
        info!(language = language.tag(), "language changed");
        Ok(language.direction())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::MemoryStore;

    #[tokio::test]
    async fn persisted_choice_wins_over_device() {
        let kv = Arc::new(MemoryStore::default());
        kv.seed(StorageKey::Language, "\"en\"");
        let pref = LanguagePreference::new(kv);

        assert_eq!(pref.resolve("ar").await, Language::En);
    }

    #[tokio::test]
    async fn falls_back_to_device_then_english() {
        let pref = LanguagePreference::new(Arc::new(MemoryStore::default()));

        assert_eq!(pref.resolve("ar").await, Language::Ar);
        assert_eq!(pref.resolve("fr").await, Language::En);
        assert_eq!(pref.resolve("").await, Language::En);
    }

    #[tokio::test]
    async fn unsupported_persisted_tag_is_ignored() {
        let kv = Arc::new(MemoryStore::default());
        kv.seed(StorageKey::Language, "\"de\"");
        let pref = LanguagePreference::new(kv);

        assert_eq!(pref.resolve("ar").await, Language::Ar);
    }

    #[tokio::test]
    async fn change_persists_and_reports_direction() {
        let kv = Arc::new(MemoryStore::default());
        let pref = LanguagePreference::new(kv.clone());

        assert_eq!(pref.change(Language::Ar).await.unwrap(), LayoutDirection::RightToLeft);
        assert_eq!(kv.raw(StorageKey::Language).as_deref(), Some("\"ar\""));
        assert_eq!(pref.resolve("en").await, Language::Ar);
    }

    #[tokio::test]
    async fn change_surfaces_write_failure() {
        let kv = Arc::new(MemoryStore::default());
        kv.fail_writes();
        let pref = LanguagePreference::new(kv);

        assert!(pref.change(Language::En).await.is_err());
    }
}
