//! Launch barrier.
//!
//! A join over three blocking signals (session loaded, biometric flag read,
//! entry animation finished) plus one non-blocking signal (capability probe).
//! The decision is computed on whichever blocking signal arrives last and is
//! frozen afterwards.

use serde::Serialize;

use crate::biometric::BiometricCapability;
use crate::bootstrap::RoutingDecision;

/// Signals feeding the launch barrier.
///
/// Failures are mapped to their safe default before they become signals:
/// a failed session load is `SessionLoaded { present: false }`, a failed
/// probe is `CapabilityResolved(BiometricCapability::unsupported())`.
///
/// 启动屏障的输入信号。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapSignal {
    SessionLoaded { present: bool },
    BiometricEnabledResolved(bool),
    CapabilityResolved(BiometricCapability),
    AnimationFinished,
}

/// Barrier phase.
///
/// 屏障阶段。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BootstrapPhase {
    /// Waiting for at least one blocking signal.
    Pending,
    /// Decision made; no further signal may change it.
    Decided(RoutingDecision),
    /// Launch screen went away before a decision was made.
    Abandoned,
}

/// Pure join state for the launch sequence.
#[derive(Debug, Clone)]
pub struct BootstrapBarrier {
    session_present: Option<bool>,
    biometric_enabled: Option<bool>,
    capability: Option<BiometricCapability>,
    animation_finished: bool,
    phase: BootstrapPhase,
}

impl BootstrapBarrier {
    pub fn new() -> Self {
        Self {
            session_present: None,
            biometric_enabled: None,
            capability: None,
            animation_finished: false,
            phase: BootstrapPhase::Pending,
        }
    }

    /// Record a signal.
    ///
    /// Returns `Some(decision)` only on the call that moves the barrier from
    /// `Pending` to `Decided`. Signals received after that, or after
    /// [`abandon`](Self::abandon), return `None` and change nothing. While
    /// pending, the first value of each input wins.
    pub fn apply(&mut self, signal: BootstrapSignal) -> Option<RoutingDecision> {
        if self.phase != BootstrapPhase::Pending {
            return None;
        }

        match signal {
            BootstrapSignal::SessionLoaded { present } => {
                self.session_present.get_or_insert(present);
            }
            BootstrapSignal::BiometricEnabledResolved(enabled) => {
                self.biometric_enabled.get_or_insert(enabled);
            }
            BootstrapSignal::CapabilityResolved(capability) => {
                self.capability.get_or_insert(capability);
            }
            BootstrapSignal::AnimationFinished => {
                self.animation_finished = true;
            }
        }

        if !self.is_satisfied() {
            return None;
        }

        // An unanswered probe never blocks; it only gates the unlock step.
        let supported = self.capability.map(|c| c.supported).unwrap_or(false);
        let decision = RoutingDecision::decide(
            self.session_present.unwrap_or(false),
            self.biometric_enabled.unwrap_or(false),
            supported,
        );
        self.phase = BootstrapPhase::Decided(decision);
        Some(decision)
    }

    /// Mark the launch screen as torn down.
    ///
    /// Returns `true` if the barrier was still pending.
    pub fn abandon(&mut self) -> bool {
        if self.phase == BootstrapPhase::Pending {
            self.phase = BootstrapPhase::Abandoned;
            return true;
        }
        false
    }

    /// All blocking inputs have arrived.
    pub fn is_satisfied(&self) -> bool {
        self.session_present.is_some()
            && self.biometric_enabled.is_some()
            && self.animation_finished
    }

    pub fn phase(&self) -> BootstrapPhase {
        self.phase
    }

    pub fn decision(&self) -> Option<RoutingDecision> {
        match self.phase {
            BootstrapPhase::Decided(decision) => Some(decision),
            _ => None,
        }
    }

    pub fn capability(&self) -> Option<BiometricCapability> {
        self.capability
    }
}

impl Default for BootstrapBarrier {
    fn default() -> Self {
        Self::new()
    }
}
