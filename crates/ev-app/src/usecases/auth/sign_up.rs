use std::sync::Arc;

use thiserror::Error;
use tracing::{info, info_span, warn, Instrument};

use ev_core::biometric::BiometricCapability;
use ev_core::bootstrap::Destination;
use ev_core::credentials::{CredentialsError, SignUpForm};
use ev_core::ports::{
    AuthProviderError, AuthProviderPort, BiometricProbePort, PersistenceError, RouterPort,
};

use crate::session_store::SessionStore;

#[derive(Debug, Error)]
pub enum SignUpError {
    #[error(transparent)]
    Invalid(#[from] CredentialsError),

    #[error(transparent)]
    Provider(#[from] AuthProviderError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// What the sign-up screen does next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostSignUp {
    /// Device supports biometrics; present the enrolment offer.
    OfferBiometric(BiometricCapability),
    /// App root already shown.
    EnteredApp,
}

/// Account creation.
pub struct SignUp {
    auth_provider: Arc<dyn AuthProviderPort>,
    session_store: Arc<SessionStore>,
    probe: Arc<dyn BiometricProbePort>,
    router: Arc<dyn RouterPort>,
}

impl SignUp {
    pub fn new(
        auth_provider: Arc<dyn AuthProviderPort>,
        session_store: Arc<SessionStore>,
        probe: Arc<dyn BiometricProbePort>,
        router: Arc<dyn RouterPort>,
    ) -> Self {
        Self {
            auth_provider,
            session_store,
            probe,
            router,
        }
    }

    pub async fn execute(&self, form: &SignUpForm) -> Result<PostSignUp, SignUpError> {
        let span = info_span!("usecase.sign_up.execute");

        async {
            let (credentials, name) = form.validate()?;
            let session = self.auth_provider.sign_up(&credentials, &name).await?;
            let user_id = session.user_id.clone();

            self.session_store.set(session).await?;
            info!(%user_id, "account created");

            let capability = match self.probe.check_support().await {
                Ok(capability) => capability,
                Err(err) => {
                    warn!(error = %err, "biometric probe failed after sign-up");
                    BiometricCapability::unsupported()
                }
            };

            if capability.supported {
                return Ok(PostSignUp::OfferBiometric(capability));
            }

            self.router.replace_root(Destination::App);
            Ok(PostSignUp::EnteredApp)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ev_core::biometric::BiometricModality;
    use ev_core::ports::KeyValueStorePort;

    use crate::usecases::test_support::{MemoryStore, RecordingRouter, StubAuthProvider, StubProbe};

    fn signup(probe: StubProbe) -> (SignUp, Arc<SessionStore>, Arc<RecordingRouter>) {
        let kv: Arc<dyn KeyValueStorePort> = Arc::new(MemoryStore::default());
        let store = Arc::new(SessionStore::new(kv));
        let router = Arc::new(RecordingRouter::default());
        let usecase = SignUp::new(
            Arc::new(StubAuthProvider::accepting("unused")),
            store.clone(),
            Arc::new(probe),
            router.clone(),
        );
        (usecase, store, router)
    }

    fn form() -> SignUpForm {
        SignUpForm {
            email: "omar@example.com".to_string(),
            password: "correct horse".to_string(),
            name: " Omar ".to_string(),
        }
    }

    #[tokio::test]
    async fn supported_device_gets_enrolment_offer() {
        let (usecase, store, router) = signup(StubProbe::supported(BiometricModality::Face));

        let next = usecase.execute(&form()).await.unwrap();

        match next {
            PostSignUp::OfferBiometric(capability) => {
                assert_eq!(capability.modality, BiometricModality::Face)
            }
            other => panic!("expected enrolment offer, got {other:?}"),
        }
        assert_eq!(
            store.current().and_then(|s| s.display_name).as_deref(),
            Some("Omar")
        );
        assert_eq!(router.calls(), 0);
    }

    #[tokio::test]
    async fn unsupported_device_enters_app() {
        let (usecase, _store, router) = signup(StubProbe::unsupported());

        assert_eq!(usecase.execute(&form()).await.unwrap(), PostSignUp::EnteredApp);
        assert_eq!(router.destinations(), vec![Destination::App]);
    }

    #[tokio::test]
    async fn probe_failure_enters_app() {
        let (usecase, _store, router) = signup(StubProbe::failing());

        assert_eq!(usecase.execute(&form()).await.unwrap(), PostSignUp::EnteredApp);
        assert_eq!(router.destinations(), vec![Destination::App]);
    }

    #[tokio::test]
    async fn short_password_is_rejected() {
        let (usecase, store, _router) = signup(StubProbe::unsupported());
        let mut short = form();
        short.password = "1234567".to_string();

        let err = usecase.execute(&short).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "Password must be at least 8 characters long"
        );
        assert!(!store.is_authenticated());
    }
}
