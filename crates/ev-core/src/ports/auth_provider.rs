use async_trait::async_trait;

use crate::credentials::Credentials;
use crate::ports::errors::AuthProviderError;
use crate::session::Session;

/// External auth provider.
#[async_trait]
pub trait AuthProviderPort: Send + Sync {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthProviderError>;

    async fn sign_up(
        &self,
        credentials: &Credentials,
        name: &str,
    ) -> Result<Session, AuthProviderError>;
}
