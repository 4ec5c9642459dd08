use std::sync::Arc;

use thiserror::Error;
use tracing::{info, info_span, Instrument};

use ev_core::bootstrap::Destination;
use ev_core::ports::{PersistenceError, RouterPort};

use crate::session_store::SessionStore;

#[derive(Debug, Error)]
pub enum LogoutError {
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

pub struct Logout {
    session_store: Arc<SessionStore>,
    router: Arc<dyn RouterPort>,
}

impl Logout {
    pub fn new(session_store: Arc<SessionStore>, router: Arc<dyn RouterPort>) -> Self {
        Self {
            session_store,
            router,
        }
    }

    /// Clear the session and return to sign-in.
    ///
    /// The biometric opt-in is device-scoped and survives logout.
    pub async fn execute(&self) -> Result<(), LogoutError> {
        let span = info_span!("usecase.logout.execute");

        async {
            self.session_store.clear().await?;
            info!("signed out");
            self.router.replace_root(Destination::Auth);
            Ok(())
        }
        .instrument(span)
        .await
    }
}
