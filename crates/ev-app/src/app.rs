use std::sync::Arc;

use crate::session_store::SessionStore;
use crate::usecases::{
    BiometricPreference, BiometricUnlock, BootstrapSequencer, EnableBiometric, GetProfileSummary,
    LanguagePreference, Logout, SearchEvents, SignIn, SignUp,
};
use crate::AppDeps;

/// The application runtime.
///
/// Owns the shared session store and hands out use cases wired to it.
pub struct App {
    deps: AppDeps,
    session_store: Arc<SessionStore>,
    biometric_preference: Arc<BiometricPreference>,
}

impl App {
    /// Create new App instance from dependencies
    /// 从依赖创建新的 App 实例
    ///
    /// This constructor signature IS the dependency manifest.
    /// 这个构造函数签名就是依赖清单。
    pub fn new(deps: AppDeps) -> Self {
        let session_store = Arc::new(SessionStore::new(deps.store.clone()));
        let biometric_preference = Arc::new(BiometricPreference::new(deps.store.clone()));

        Self {
            deps,
            session_store,
            biometric_preference,
        }
    }

    pub fn session_store(&self) -> Arc<SessionStore> {
        self.session_store.clone()
    }

    pub fn biometric_preference(&self) -> Arc<BiometricPreference> {
        self.biometric_preference.clone()
    }

    /// One sequencer per launch; its barrier decides once.
    pub fn bootstrap_sequencer(&self) -> BootstrapSequencer {
        BootstrapSequencer::new(
            self.session_store.clone(),
            self.biometric_preference.clone(),
            self.deps.biometric_probe.clone(),
            self.deps.router.clone(),
        )
    }

    pub fn sign_in(&self) -> SignIn {
        SignIn::new(
            self.deps.auth_provider.clone(),
            self.session_store.clone(),
            self.deps.router.clone(),
        )
    }

    pub fn sign_up(&self) -> SignUp {
        SignUp::new(
            self.deps.auth_provider.clone(),
            self.session_store.clone(),
            self.deps.biometric_probe.clone(),
            self.deps.router.clone(),
        )
    }

    pub fn enable_biometric(&self) -> EnableBiometric {
        EnableBiometric::new(
            self.deps.biometric_probe.clone(),
            self.biometric_preference.clone(),
            self.deps.router.clone(),
        )
    }

    /// Fresh attempt counter per unlock screen.
    pub fn biometric_unlock(&self) -> BiometricUnlock {
        BiometricUnlock::new(
            self.deps.biometric_probe.clone(),
            self.deps.router.clone(),
            self.deps.unlock_policy,
        )
    }

    pub fn logout(&self) -> Logout {
        Logout::new(self.session_store.clone(), self.deps.router.clone())
    }

    pub fn profile_summary(&self) -> GetProfileSummary {
        GetProfileSummary::new(
            self.session_store.clone(),
            self.biometric_preference.clone(),
            self.deps.biometric_probe.clone(),
        )
    }

    pub fn search_events(&self) -> SearchEvents {
        SearchEvents::new(self.deps.events.clone())
    }

    pub fn language_preference(&self) -> LanguagePreference {
        LanguagePreference::new(self.deps.store.clone())
    }
}
