//! Offer to turn on biometric unlock after sign-up.

use std::sync::Arc;

use thiserror::Error;
use tracing::{info, info_span, warn, Instrument};

use ev_core::biometric::BiometricCapability;
use ev_core::bootstrap::Destination;
use ev_core::ports::{
    BiometricProbePort, BiometricPrompt, PersistenceError, ProbeError, RouterPort,
};

use super::BiometricPreference;

#[derive(Debug, Error)]
pub enum EnableBiometricError {
    #[error("biometric authentication is not available on this device")]
    NotSupported,

    /// User dismissed or failed the prompt; the offer screen stays up.
    #[error("biometric authentication failed")]
    NotAuthenticated,

    #[error(transparent)]
    Probe(#[from] ProbeError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

pub struct EnableBiometric {
    probe: Arc<dyn BiometricProbePort>,
    preference: Arc<BiometricPreference>,
    router: Arc<dyn RouterPort>,
}

impl EnableBiometric {
    pub fn new(
        probe: Arc<dyn BiometricProbePort>,
        preference: Arc<BiometricPreference>,
        router: Arc<dyn RouterPort>,
    ) -> Self {
        Self {
            probe,
            preference,
            router,
        }
    }

    /// Capability backing the offer screen's wording.
    pub async fn offer(&self) -> Result<BiometricCapability, EnableBiometricError> {
        let capability = self.probe.check_support().await?;
        if !capability.supported {
            return Err(EnableBiometricError::NotSupported);
        }
        Ok(capability)
    }

    /// Prompt once; on success persist the opt-in and enter the app.
    pub async fn execute(&self) -> Result<(), EnableBiometricError> {
        let span = info_span!("usecase.enable_biometric.execute");

        async {
            let capability = self.offer().await?;
            let prompt =
                BiometricPrompt::new(format!("Enable {} authentication", capability.label()));

            let outcome = self.probe.authenticate(&prompt).await?;
            if !outcome.success {
                warn!("biometric enrolment prompt not confirmed");
                return Err(EnableBiometricError::NotAuthenticated);
            }

            self.preference.enable().await?;
            info!(modality = ?capability.modality, "biometric enrolment completed");
            self.router.replace_root(Destination::App);
            Ok(())
        }
        .instrument(span)
        .await
    }

    /// Decline the offer.
    pub fn skip(&self) {
        info!("biometric enrolment skipped");
        self.router.replace_root(Destination::App);
    }
}
