//! Hand-written port doubles shared by the unit tests of this crate.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use ev_core::biometric::{AuthenticationOutcome, BiometricCapability, BiometricModality};
use ev_core::bootstrap::Destination;
use ev_core::credentials::Credentials;
use ev_core::events::EventsResponse;
use ev_core::ports::{
    AuthProviderError, AuthProviderPort, BiometricProbePort, BiometricPrompt, EventsError,
    EventsPort, GetEventsParams, KeyValueStorePort, PersistenceError, ProbeError, RouterPort,
};
use ev_core::{Session, StorageKey, UserId};

#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<StorageKey, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    fail_removes: AtomicBool,
    read_delays: Mutex<HashMap<StorageKey, Duration>>,
}

impl MemoryStore {
    pub fn seed(&self, key: StorageKey, raw: &str) {
        self.values.lock().unwrap().insert(key, raw.to_string());
    }

    pub fn raw(&self, key: StorageKey) -> Option<String> {
        self.values.lock().unwrap().get(&key).cloned()
    }

    pub fn fail_reads(&self) {
        self.fail_reads.store(true, Ordering::SeqCst);
    }

    pub fn fail_writes(&self) {
        self.fail_writes.store(true, Ordering::SeqCst);
    }

    pub fn fail_removes(&self) {
        self.fail_removes.store(true, Ordering::SeqCst);
    }

    pub fn delay_reads_of(&self, key: StorageKey, delay: Duration) {
        self.read_delays.lock().unwrap().insert(key, delay);
    }
}

#[async_trait]
impl KeyValueStorePort for MemoryStore {
    async fn get(&self, key: StorageKey) -> Result<Option<String>, PersistenceError> {
        let delay = self.read_delays.lock().unwrap().get(&key).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(PersistenceError::Read {
                key,
                message: "disk unavailable".to_string(),
            });
        }
        Ok(self.raw(key))
    }

    async fn set(&self, key: StorageKey, value: &str) -> Result<(), PersistenceError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PersistenceError::Write {
                key,
                message: "disk full".to_string(),
            });
        }
        self.seed(key, value);
        Ok(())
    }

    async fn remove(&self, key: StorageKey) -> Result<(), PersistenceError> {
        if self.fail_removes.load(Ordering::SeqCst) {
            return Err(PersistenceError::Remove {
                key,
                message: "read-only filesystem".to_string(),
            });
        }
        self.values.lock().unwrap().remove(&key);
        Ok(())
    }
}

/// Probe with scripted answers.
pub struct StubProbe {
    capability: Result<BiometricCapability, ProbeError>,
    delay: Option<Duration>,
    outcomes: Mutex<Vec<Result<AuthenticationOutcome, ProbeError>>>,
    prompts: Mutex<Vec<String>>,
}

impl StubProbe {
    pub fn supported(modality: BiometricModality) -> Self {
        Self::with_capability(Ok(BiometricCapability {
            supported: true,
            modality,
        }))
    }

    pub fn unsupported() -> Self {
        Self::with_capability(Ok(BiometricCapability::unsupported()))
    }

    pub fn failing() -> Self {
        Self::with_capability(Err(ProbeError::Failed("sensor error".to_string())))
    }

    fn with_capability(capability: Result<BiometricCapability, ProbeError>) -> Self {
        Self {
            capability,
            delay: None,
            outcomes: Mutex::new(Vec::new()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queue prompt answers; consumed in order, then `failed()` forever.
    pub fn answering(self, outcomes: Vec<Result<AuthenticationOutcome, ProbeError>>) -> Self {
        *self.outcomes.lock().unwrap() = outcomes.into_iter().rev().collect();
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl BiometricProbePort for StubProbe {
    async fn check_support(&self) -> Result<BiometricCapability, ProbeError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.capability.clone()
    }

    async fn authenticate(
        &self,
        prompt: &BiometricPrompt,
    ) -> Result<AuthenticationOutcome, ProbeError> {
        self.prompts.lock().unwrap().push(prompt.message.clone());
        self.outcomes
            .lock()
            .unwrap()
            .pop()
            .unwrap_or(Ok(AuthenticationOutcome::failed()))
    }
}

#[derive(Default)]
pub struct RecordingRouter {
    destinations: Mutex<Vec<Destination>>,
    calls: AtomicUsize,
}

impl RecordingRouter {
    pub fn destinations(&self) -> Vec<Destination> {
        self.destinations.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RouterPort for RecordingRouter {
    fn replace_root(&self, destination: Destination) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.destinations.lock().unwrap().push(destination);
    }
}

/// Auth provider that accepts one password.
pub struct StubAuthProvider {
    pub accepted_password: String,
}

impl StubAuthProvider {
    pub fn accepting(password: &str) -> Self {
        Self {
            accepted_password: password.to_string(),
        }
    }
}

#[async_trait]
impl AuthProviderPort for StubAuthProvider {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthProviderError> {
        if credentials.password() != self.accepted_password {
            return Err(AuthProviderError::Rejected {
                message: "Invalid login credentials".to_string(),
            });
        }
        Ok(Session::new(UserId::from("user-1")).with_email(credentials.email()))
    }

    async fn sign_up(
        &self,
        credentials: &Credentials,
        name: &str,
    ) -> Result<Session, AuthProviderError> {
        Ok(Session::new(UserId::from("user-2"))
            .with_email(credentials.email())
            .with_display_name(name))
    }
}

/// Discovery API with one canned answer; records every query.
pub struct StubEvents {
    answer: Result<EventsResponse, EventsError>,
    requests: Mutex<Vec<GetEventsParams>>,
}

impl StubEvents {
    pub fn returning(response: EventsResponse) -> Self {
        Self {
            answer: Ok(response),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(err: EventsError) -> Self {
        Self {
            answer: Err(err),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<GetEventsParams> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventsPort for StubEvents {
    async fn get_events(&self, params: &GetEventsParams) -> Result<EventsResponse, EventsError> {
        self.requests.lock().unwrap().push(params.clone());
        self.answer.clone()
    }
}
