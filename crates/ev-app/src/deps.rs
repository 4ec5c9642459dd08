//! # Application Dependencies
//!
//! This module defines the dependency grouping for App construction.
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No default values
//! - No hidden logic
//! - Just parameter grouping

use std::sync::Arc;

use ev_core::ports::{
    AuthProviderPort, BiometricProbePort, EventsPort, KeyValueStorePort, RouterPort,
};
use ev_core::unlock::UnlockPolicy;

/// Application dependency grouping (non-Builder, just parameter grouping)
///
/// 应用依赖分组（非 Builder，仅参数打包）
///
/// All dependencies are required - no defaults, no optional fields.
pub struct AppDeps {
    // Storage dependencies / 存储依赖
    pub store: Arc<dyn KeyValueStorePort>,

    // Platform dependencies / 平台依赖
    pub biometric_probe: Arc<dyn BiometricProbePort>,
    pub router: Arc<dyn RouterPort>,

    // Remote dependencies / 远程依赖
    pub auth_provider: Arc<dyn AuthProviderPort>,
    pub events: Arc<dyn EventsPort>,

    // Policy / 策略
    pub unlock_policy: UnlockPolicy,
}
