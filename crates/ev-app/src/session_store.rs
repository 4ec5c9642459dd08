//! Session store.
//!
//! Sole writer of session identity. Every mutation is persisted before the
//! in-memory value changes, so readers never observe an uncommitted session.
//!
//! ## Lock Ordering
//! `write_lock` serializes `load`/`set`/`clear`; it is held across the
//! persistence call and released after the in-memory state is published.

use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tracing::{info, info_span, warn, Instrument};

use ev_core::ports::{read_json, write_json, KeyValueStorePort, PersistenceError};
use ev_core::{Session, StorageKey};

/// Observable session state.
///
/// 可观察的会话状态。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub session: Option<Session>,
    /// `true` until the first `load` completes.
    pub loading: bool,
}

impl SessionSnapshot {
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }
}

/// Owns the in-memory "current user" and its persisted copy.
pub struct SessionStore {
    store: Arc<dyn KeyValueStorePort>,
    state: watch::Sender<SessionSnapshot>,
    write_lock: Mutex<()>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        let (state, _) = watch::channel(SessionSnapshot {
            session: None,
            loading: true,
        });
        Self {
            store,
            state,
            write_lock: Mutex::new(()),
        }
    }

    /// Read the persisted session into memory.
    ///
    /// Fails soft: a read or decode error is logged and treated as "absent".
    /// Clears the `loading` flag.
    pub async fn load(&self) -> Option<Session> {
        let span = info_span!("usecase.session_store.load");

        async {
            let _guard = self.write_lock.lock().await;

            let session = match read_json::<Session>(self.store.as_ref(), StorageKey::User).await {
                Ok(session) => session,
                Err(err) => {
                    warn!(error = %err, "failed to load persisted session, treating as signed out");
                    None
                }
            };

            info!(authenticated = session.is_some(), "session loaded");
            self.publish(session.clone(), false);
            session
        }
        .instrument(span)
        .await
    }

    /// Persist `session`, then make it current.
    ///
    /// On failure the in-memory state is left unchanged.
    pub async fn set(&self, session: Session) -> Result<(), PersistenceError> {
        let span = info_span!("usecase.session_store.set", user_id = %session.user_id);

        async {
            let _guard = self.write_lock.lock().await;

            write_json(self.store.as_ref(), StorageKey::User, &session).await?;

            let loading = self.state.borrow().loading;
            self.publish(Some(session), loading);
            info!("session committed");
            Ok(())
        }
        .instrument(span)
        .await
    }

    /// Remove the persisted session, then clear memory.
    ///
    /// On failure the in-memory session is kept; the caller decides whether
    /// to treat logout as complete.
    pub async fn clear(&self) -> Result<(), PersistenceError> {
        let span = info_span!("usecase.session_store.clear");

        async {
            let _guard = self.write_lock.lock().await;

            self.store.remove(StorageKey::User).await?;

            let loading = self.state.borrow().loading;
            self.publish(None, loading);
            info!("session cleared");
            Ok(())
        }
        .instrument(span)
        .await
    }

    pub fn current(&self) -> Option<Session> {
        self.state.borrow().session.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Observe session changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.state.subscribe()
    }

    fn publish(&self, session: Option<Session>, loading: bool) {
        self.state.send_replace(SessionSnapshot { session, loading });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::MemoryStore;
    use ev_core::UserId;

    fn alice() -> Session {
        Session::new(UserId::from("alice")).with_email("alice@example.com")
    }

    #[tokio::test]
    async fn starts_loading_and_unauthenticated() {
        let store = SessionStore::new(Arc::new(MemoryStore::default()));

        assert!(store.is_loading());
        assert!(!store.is_authenticated());
        assert_eq!(store.current(), None);
    }

    #[tokio::test]
    async fn load_reads_persisted_session_and_clears_loading() {
        let kv = Arc::new(MemoryStore::default());
        kv.seed(StorageKey::User, &serde_json::to_string(&alice()).unwrap());
        let store = SessionStore::new(kv);

        let loaded = store.load().await;

        assert_eq!(loaded, Some(alice()));
        assert!(!store.is_loading());
        assert!(store.is_authenticated());
    }

    #[tokio::test]
    async fn load_treats_read_failure_as_absent() {
        let kv = Arc::new(MemoryStore::default());
        kv.fail_reads();
        let store = SessionStore::new(kv);

        assert_eq!(store.load().await, None);
        assert!(!store.is_loading());
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn load_treats_corrupt_blob_as_absent() {
        let kv = Arc::new(MemoryStore::default());
        kv.seed(StorageKey::User, "{\"user\":");
        let store = SessionStore::new(kv);

        assert_eq!(store.load().await, None);
        assert!(!store.is_authenticated());
    }

    #[tokio::test]
    async fn set_persists_before_commit() {
        let kv = Arc::new(MemoryStore::default());
        let store = SessionStore::new(kv.clone());

        store.set(alice()).await.unwrap();

        assert!(store.is_authenticated());
        assert_eq!(store.current(), Some(alice()));
        let raw = kv.raw(StorageKey::User).expect("persisted");
        assert_eq!(serde_json::from_str::<Session>(&raw).unwrap(), alice());
    }

    #[tokio::test]
    async fn failed_set_leaves_state_untouched() {
        let kv = Arc::new(MemoryStore::default());
        kv.fail_writes();
        let store = SessionStore::new(kv.clone());
        store.load().await;

        let err = store.set(alice()).await.unwrap_err();

        assert!(matches!(err, PersistenceError::Write { .. }));
        assert!(!store.is_authenticated());
        assert_eq!(store.current(), None);

        let reloaded = SessionStore::new(kv);
        assert_eq!(reloaded.load().await, None);
    }

    #[tokio::test]
    async fn clear_removes_persisted_session() {
        let kv = Arc::new(MemoryStore::default());
        let store = SessionStore::new(kv.clone());
        store.set(alice()).await.unwrap();

        store.clear().await.unwrap();

        assert!(!store.is_authenticated());
        assert_eq!(kv.raw(StorageKey::User), None);
    }

    #[tokio::test]
    async fn failed_clear_keeps_session() {
        let kv = Arc::new(MemoryStore::default());
        let store = SessionStore::new(kv.clone());
        store.set(alice()).await.unwrap();
        kv.fail_removes();

        let err = store.clear().await.unwrap_err();

        assert!(matches!(err, PersistenceError::Remove { .. }));
        assert_eq!(store.current(), Some(alice()));
        assert!(kv.raw(StorageKey::User).is_some());
    }

    #[tokio::test]
    async fn subscribers_observe_committed_changes() {
        let store = SessionStore::new(Arc::new(MemoryStore::default()));
        let mut rx = store.subscribe();

        store.set(alice()).await.unwrap();
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_authenticated());

        store.clear().await.unwrap();
        rx.changed().await.unwrap();
        assert!(!rx.borrow_and_update().is_authenticated());
    }
}
