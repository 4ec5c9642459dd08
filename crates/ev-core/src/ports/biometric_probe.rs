use async_trait::async_trait;

use crate::biometric::{AuthenticationOutcome, BiometricCapability};
use crate::ports::errors::ProbeError;

/// Interactive prompt shown by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiometricPrompt {
    pub message: String,
    pub cancel_label: String,
    /// Allow the device passcode as a fallback.
    pub allow_device_fallback: bool,
}

impl BiometricPrompt {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cancel_label: "Cancel".to_string(),
            allow_device_fallback: true,
        }
    }
}

/// Biometric hardware probe.
///
/// 生物识别能力探测端口。
#[async_trait]
pub trait BiometricProbePort: Send + Sync {
    /// Hardware support, enrollment and modality.
    async fn check_support(&self) -> Result<BiometricCapability, ProbeError>;

    /// Show an interactive prompt.
    async fn authenticate(&self, prompt: &BiometricPrompt)
        -> Result<AuthenticationOutcome, ProbeError>;
}
