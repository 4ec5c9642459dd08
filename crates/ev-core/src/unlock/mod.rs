//! Biometric unlock retry policy.
//!
//! The unlock screen re-prompts after a failed attempt until the user cancels
//! or the attempt cap is reached. Reaching the cap sends the user back to the
//! auth screen.

use serde::Serialize;

/// Attempts allowed when configuration does not set a cap.
pub const DEFAULT_MAX_UNLOCK_ATTEMPTS: u32 = 3;

/// Retry policy for the unlock screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockPolicy {
    pub max_attempts: u32,
}

impl UnlockPolicy {
    /// A zero cap from configuration means "use the default".
    pub fn from_config(max_attempts: u32) -> Self {
        if max_attempts == 0 {
            return Self::default();
        }
        Self { max_attempts }
    }
}

impl Default for UnlockPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_UNLOCK_ATTEMPTS,
        }
    }
}

/// Outcome reported to the unlock screen after each interaction.
///
/// 解锁界面每次交互后的结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnlockOutcome {
    /// Authenticated; the app root has been shown.
    Unlocked,
    /// Failed; the screen may offer "Try Again".
    Retry { remaining: u32 },
    /// Attempt cap reached; the auth root has been shown.
    Exhausted,
    /// User cancelled; the auth root has been shown.
    Cancelled,
}

impl UnlockOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Retry { .. })
    }
}

/// Pure attempt counter.
#[derive(Debug, Clone)]
pub struct UnlockAttempts {
    policy: UnlockPolicy,
    failures: u32,
    terminal: Option<UnlockOutcome>,
}

impl UnlockAttempts {
    pub fn new(policy: UnlockPolicy) -> Self {
        Self {
            policy,
            failures: 0,
            terminal: None,
        }
    }

    /// Terminal outcome, if one has been recorded.
    pub fn terminal(&self) -> Option<UnlockOutcome> {
        self.terminal
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// Record the result of one prompt.
    pub fn record(&mut self, success: bool) -> UnlockOutcome {
        if let Some(outcome) = self.terminal {
            return outcome;
        }
        if success {
            return self.finish(UnlockOutcome::Unlocked);
        }

        self.failures += 1;
        if self.failures >= self.policy.max_attempts {
            return self.finish(UnlockOutcome::Exhausted);
        }
        UnlockOutcome::Retry {
            remaining: self.policy.max_attempts - self.failures,
        }
    }

    pub fn cancel(&mut self) -> UnlockOutcome {
        if let Some(outcome) = self.terminal {
            return outcome;
        }
        self.finish(UnlockOutcome::Cancelled)
    }

    fn finish(&mut self, outcome: UnlockOutcome) -> UnlockOutcome {
        self.terminal = Some(outcome);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_from_config_uses_default_cap() {
        assert_eq!(UnlockPolicy::from_config(0).max_attempts, DEFAULT_MAX_UNLOCK_ATTEMPTS);
        assert_eq!(UnlockPolicy::from_config(7).max_attempts, 7);
    }

    #[test]
    fn failures_count_down_then_exhaust() {
        let mut attempts = UnlockAttempts::new(UnlockPolicy { max_attempts: 3 });
        assert_eq!(attempts.record(false), UnlockOutcome::Retry { remaining: 2 });
        assert_eq!(attempts.record(false), UnlockOutcome::Retry { remaining: 1 });
        assert_eq!(attempts.record(false), UnlockOutcome::Exhausted);
        assert_eq!(attempts.record(true), UnlockOutcome::Exhausted);
        assert_eq!(attempts.failures(), 3);
    }

    #[test]
    fn success_after_failure_unlocks() {
        let mut attempts = UnlockAttempts::new(UnlockPolicy::default());
        attempts.record(false);
        assert_eq!(attempts.record(true), UnlockOutcome::Unlocked);
        assert_eq!(attempts.cancel(), UnlockOutcome::Unlocked);
    }

    #[test]
    fn cancel_is_terminal() {
        let mut attempts = UnlockAttempts::new(UnlockPolicy::default());
        assert_eq!(attempts.cancel(), UnlockOutcome::Cancelled);
        assert_eq!(attempts.record(true), UnlockOutcome::Cancelled);
        assert!(UnlockOutcome::Cancelled.is_terminal());
        assert!(!UnlockOutcome::Retry { remaining: 1 }.is_terminal());
    }
}
