use std::sync::Arc;

use thiserror::Error;
use tracing::{info, info_span, Instrument};

use ev_core::bootstrap::Destination;
use ev_core::credentials::{CredentialsError, SignInForm};
use ev_core::ports::{AuthProviderError, AuthProviderPort, PersistenceError, RouterPort};

use crate::session_store::SessionStore;

#[derive(Debug, Error)]
pub enum SignInError {
    #[error(transparent)]
    Invalid(#[from] CredentialsError),

    #[error(transparent)]
    Provider(#[from] AuthProviderError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Email/password sign-in.
pub struct SignIn {
    auth_provider: Arc<dyn AuthProviderPort>,
    session_store: Arc<SessionStore>,
    router: Arc<dyn RouterPort>,
}

impl SignIn {
    pub fn new(
        auth_provider: Arc<dyn AuthProviderPort>,
        session_store: Arc<SessionStore>,
        router: Arc<dyn RouterPort>,
    ) -> Self {
        Self {
            auth_provider,
            session_store,
            router,
        }
    }

    /// Validate, authenticate, commit the session, enter the app.
    ///
    /// Nothing navigates unless the session was persisted.
    pub async fn execute(&self, form: &SignInForm) -> Result<(), SignInError> {
        let span = info_span!("usecase.sign_in.execute");

        async {
            let credentials = form.validate()?;
            let session = self.auth_provider.sign_in(&credentials).await?;
            let user_id = session.user_id.clone();

            self.session_store.set(session).await?;

            info!(%user_id, "signed in");
            self.router.replace_root(Destination::App);
            Ok(())
        }
        .instrument(span)
        .await
    }
}
