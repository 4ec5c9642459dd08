use async_trait::async_trait;
use tracing::warn;

use ev_core::credentials::Credentials;
use ev_core::ports::{AuthProviderError, AuthProviderPort};
use ev_core::Session;

/// Provider used when no remote endpoint is configured.
///
/// Every call fails with a transport error; the headless shell only exercises
/// launch routing.
#[derive(Debug, Default, Clone)]
pub struct DisconnectedAuthProvider;

impl DisconnectedAuthProvider {
    pub fn new() -> Self {
        Self
    }

    fn unavailable() -> AuthProviderError {
        AuthProviderError::Transport("no auth provider configured".to_string())
    }
}

#[async_trait]
impl AuthProviderPort for DisconnectedAuthProvider {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthProviderError> {
        warn!(email = credentials.email(), "sign-in attempted without auth provider");
        Err(Self::unavailable())
    }

    async fn sign_up(
        &self,
        credentials: &Credentials,
        _name: &str,
    ) -> Result<Session, AuthProviderError> {
        warn!(email = credentials.email(), "sign-up attempted without auth provider");
        Err(Self::unavailable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ev_core::credentials::SignInForm;

    #[tokio::test]
    async fn every_call_is_a_transport_error() {
        let creds = SignInForm {
            email: "a@example.com".to_string(),
            password: "pw".to_string(),
        }
        .validate()
        .unwrap();

        let err = DisconnectedAuthProvider::new().sign_in(&creds).await.unwrap_err();

        assert!(matches!(err, AuthProviderError::Transport(_)));
    }
}
