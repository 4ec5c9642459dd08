use serde::{Deserialize, Serialize};

/// Top-level destinations the router can replace its root with.
///
/// 路由可切换到的顶层目的地。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    Auth,
    BiometricUnlock,
    App,
}

/// Terminal output of the launch sequence.
///
/// 启动流程的最终路由决策（每次启动最多计算一次）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoutingDecision {
    ShowAuth,
    ShowBiometricUnlock,
    ShowApp,
}

impl RoutingDecision {
    /// Evaluate the launch decision table.
    ///
    /// Precedence:
    /// 1. no session => `ShowAuth`
    /// 2. session, biometric enabled and supported => `ShowBiometricUnlock`
    /// 3. otherwise => `ShowApp`
    pub fn decide(
        session_present: bool,
        biometric_enabled: bool,
        biometric_supported: bool,
    ) -> Self {
        if !session_present {
            return Self::ShowAuth;
        }
        if biometric_enabled && biometric_supported {
            return Self::ShowBiometricUnlock;
        }
        Self::ShowApp
    }

    pub fn destination(&self) -> Destination {
        match self {
            Self::ShowAuth => Destination::Auth,
            Self::ShowBiometricUnlock => Destination::BiometricUnlock,
            Self::ShowApp => Destination::App,
        }
    }
}
