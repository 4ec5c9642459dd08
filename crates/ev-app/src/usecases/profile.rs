//! Profile screen summary.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use ev_core::biometric::BiometricCapability;
use ev_core::ports::BiometricProbePort;

use crate::session_store::SessionStore;
use crate::usecases::biometric::BiometricPreference;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("no user is signed in")]
    NotSignedIn,
}

/// Read model for the profile screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileSummary {
    pub greeting_name: String,
    pub email: Option<String>,
    pub biometric_enabled: bool,
    pub capability: BiometricCapability,
}

impl ProfileSummary {
    /// The screen only offers enrolment when the device can do it and the
    /// user has not opted in yet.
    pub fn can_offer_biometric(&self) -> bool {
        self.capability.supported && !self.biometric_enabled
    }
}

pub struct GetProfileSummary {
    session_store: Arc<SessionStore>,
    preference: Arc<BiometricPreference>,
    probe: Arc<dyn BiometricProbePort>,
}

impl GetProfileSummary {
    pub fn new(
        session_store: Arc<SessionStore>,
        preference: Arc<BiometricPreference>,
        probe: Arc<dyn BiometricProbePort>,
    ) -> Self {
        Self {
            session_store,
            preference,
            probe,
        }
    }

    pub async fn execute(&self) -> Result<ProfileSummary, ProfileError> {
        let session = self
            .session_store
            .current()
            .ok_or(ProfileError::NotSignedIn)?;

        let capability = self.probe.check_support().await.unwrap_or_else(|err| {
            warn!(error = %err, "biometric probe failed on profile load");
            BiometricCapability::unsupported()
        });

        Ok(ProfileSummary {
            greeting_name: session.greeting_name(),
            email: session.email.clone(),
            biometric_enabled: self.preference.is_enabled_or_default().await,
            capability,
        })
    }
}
