//! Biometric gate shown when a persisted session has biometric unlock enabled.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, info_span, warn, Instrument};

use ev_core::biometric::BiometricCapability;
use ev_core::bootstrap::Destination;
use ev_core::ports::{BiometricProbePort, BiometricPrompt, RouterPort};
use ev_core::unlock::{UnlockAttempts, UnlockOutcome, UnlockPolicy};

pub struct BiometricUnlock {
    probe: Arc<dyn BiometricProbePort>,
    router: Arc<dyn RouterPort>,
    attempts: Mutex<UnlockAttempts>,
}

impl BiometricUnlock {
    pub fn new(
        probe: Arc<dyn BiometricProbePort>,
        router: Arc<dyn RouterPort>,
        policy: UnlockPolicy,
    ) -> Self {
        Self {
            probe,
            router,
            attempts: Mutex::new(UnlockAttempts::new(policy)),
        }
    }

    /// Show one prompt and route on a terminal outcome.
    ///
    /// The attempts lock is held across the prompt, so concurrent taps on
    /// "Try Again" queue behind the visible prompt instead of stacking.
    pub async fn attempt(&self) -> UnlockOutcome {
        let span = info_span!("usecase.biometric_unlock.attempt");

        async {
            let mut attempts = self.attempts.lock().await;
            if let Some(outcome) = attempts.terminal() {
                return outcome;
            }

            let capability = match self.probe.check_support().await {
                Ok(capability) => capability,
                Err(err) => {
                    warn!(error = %err, "biometric probe failed before unlock prompt");
                    BiometricCapability::unsupported()
                }
            };
            let prompt = BiometricPrompt::new(format!(
                "Authenticate with {} to continue",
                capability.label()
            ));

            let success = match self.probe.authenticate(&prompt).await {
                Ok(outcome) => outcome.success,
                Err(err) => {
                    warn!(error = %err, "biometric prompt failed");
                    false
                }
            };

            let outcome = attempts.record(success);
            drop(attempts);

            info!(?outcome, "unlock attempt finished");
            self.route(outcome);
            outcome
        }
        .instrument(span)
        .await
    }

    /// Give up on biometrics and return to sign-in.
    pub async fn cancel(&self) -> UnlockOutcome {
        let outcome = {
            let mut attempts = self.attempts.lock().await;
            if let Some(outcome) = attempts.terminal() {
                return outcome;
            }
            attempts.cancel()
        };

        info!("biometric unlock cancelled");
        self.route(outcome);
        outcome
    }

    fn route(&self, outcome: UnlockOutcome) {
        match outcome {
            UnlockOutcome::Unlocked => self.router.replace_root(Destination::App),
            UnlockOutcome::Exhausted | UnlockOutcome::Cancelled => {
                self.router.replace_root(Destination::Auth)
            }
            UnlockOutcome::Retry { .. } => {}
        }
    }
}
