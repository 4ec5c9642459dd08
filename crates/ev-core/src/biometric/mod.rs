//! Biometric capability model.
//!
//! Capability is a transient read of device hardware state. It is recomputed
//! on demand and never persisted.

use serde::{Deserialize, Serialize};

/// Biometric modality reported by the device.
///
/// 设备支持的生物识别方式。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BiometricModality {
    Face,
    Fingerprint,
    Iris,
    Generic,
}

impl BiometricModality {
    /// Pick the modality to present when the device reports several.
    ///
    /// Precedence: Face > Fingerprint > Iris > Generic.
    pub fn preferred(reported: &[BiometricModality]) -> BiometricModality {
        [Self::Face, Self::Fingerprint, Self::Iris]
            .into_iter()
            .find(|m| reported.contains(m))
            .unwrap_or(Self::Generic)
    }

    /// User-facing label used in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Face => "Face ID",
            Self::Fingerprint => "Fingerprint",
            Self::Iris => "Iris",
            Self::Generic => "Biometric",
        }
    }

    /// Parse a configuration tag (`face`, `fingerprint`, `iris`, `generic`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "face" => Some(Self::Face),
            "fingerprint" => Some(Self::Fingerprint),
            "iris" => Some(Self::Iris),
            "generic" => Some(Self::Generic),
            _ => None,
        }
    }
}

/// Device biometric capability.
///
/// 设备生物识别能力（不持久化）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiometricCapability {
    pub supported: bool,
    pub modality: BiometricModality,
}

impl BiometricCapability {
    /// Capability assumed when the probe fails or has not answered yet.
    pub fn unsupported() -> Self {
        Self {
            supported: false,
            modality: BiometricModality::Generic,
        }
    }

    /// Build a capability from raw hardware facts.
    ///
    /// Supported only when hardware is present and at least one credential is enrolled.
    pub fn from_hardware(
        has_hardware: bool,
        is_enrolled: bool,
        reported: &[BiometricModality],
    ) -> Self {
        Self {
            supported: has_hardware && is_enrolled,
            modality: BiometricModality::preferred(reported),
        }
    }

    pub fn label(&self) -> &'static str {
        self.modality.label()
    }
}

impl Default for BiometricCapability {
    fn default() -> Self {
        Self::unsupported()
    }
}

/// Result of an interactive biometric prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticationOutcome {
    pub success: bool,
}

impl AuthenticationOutcome {
    pub fn succeeded() -> Self {
        Self { success: true }
    }

    pub fn failed() -> Self {
        Self { success: false }
    }
}
