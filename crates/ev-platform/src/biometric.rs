//! Headless biometric probe.
//!
//! Reports a fixed capability taken from configuration. Prompts succeed when
//! the simulated device is supported.

use async_trait::async_trait;
use tracing::{debug, info};

use ev_core::biometric::{AuthenticationOutcome, BiometricCapability, BiometricModality};
use ev_core::ports::{BiometricProbePort, BiometricPrompt, ProbeError};
use ev_core::AppConfig;

#[derive(Debug, Clone)]
pub struct StaticBiometricProbe {
    has_hardware: bool,
    enrolled: bool,
    modality: BiometricModality,
}

impl StaticBiometricProbe {
    pub fn new(has_hardware: bool, enrolled: bool, modality: BiometricModality) -> Self {
        Self {
            has_hardware,
            enrolled,
            modality,
        }
    }

    /// Device without biometric hardware.
    pub fn absent() -> Self {
        Self::new(false, false, BiometricModality::Generic)
    }

    /// `simulated_modality` of `none`, empty or an unknown tag means no hardware.
    pub fn from_config(config: &AppConfig) -> Self {
        match BiometricModality::from_tag(&config.simulated_modality) {
            Some(modality) => Self::new(true, config.simulated_enrolled, modality),
            None => Self::absent(),
        }
    }

    fn capability(&self) -> BiometricCapability {
        let reported: &[BiometricModality] = if self.has_hardware {
            std::slice::from_ref(&self.modality)
        } else {
            &[]
        };
        BiometricCapability::from_hardware(self.has_hardware, self.enrolled, reported)
    }
}

#[async_trait]
impl BiometricProbePort for StaticBiometricProbe {
    async fn check_support(&self) -> Result<BiometricCapability, ProbeError> {
        let capability = self.capability();
        debug!(?capability, "biometric capability checked");
        Ok(capability)
    }

    async fn authenticate(
        &self,
        prompt: &BiometricPrompt,
    ) -> Result<AuthenticationOutcome, ProbeError> {
        if !self.has_hardware {
            return Err(ProbeError::Unavailable("no biometric hardware".to_string()));
        }

        let success = self.capability().supported;
        info!(message = %prompt.message, success, "biometric prompt answered");
        Ok(AuthenticationOutcome { success })
    }
}
