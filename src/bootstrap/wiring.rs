//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - Create infra implementations (key-value store, remote APIs) / 创建 infra 层具体实现
//! - Create platform implementations (probe, router) / 创建 platform 层具体实现
//! - Inject all dependencies into App / 将所有依赖注入到 App
//!
//! ## Prohibited / 禁止事项
//!
//! **No business logic / 禁止包含任何业务逻辑**
//! - Do not decide where the user lands; the sequencer does
//! - 不决定用户进入哪个页面，由启动序列决定
//!
//! > **This is the only place allowed to depend on ev-infra + ev-platform + ev-app
//! > simultaneously.**
//! > **这是唯一允许同时依赖 ev-infra、ev-platform 和 ev-app 的地方。**

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::mpsc;

use ev_app::app_paths::AppPaths;
use ev_app::{App, AppDeps};
use ev_core::bootstrap::Destination;
use ev_core::config::AppConfig;
use ev_core::ports::{AppDirsError, AppDirsPort};
use ev_core::unlock::UnlockPolicy;
use ev_infra::{DisconnectedAuthProvider, DisconnectedEventsProvider, FileKeyValueStore};
use ev_platform::{ChannelRouter, DirsAppDirsAdapter, StaticBiometricProbe};

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Application directories unavailable: {0}")]
    AppDirs(#[from] AppDirsError),
}

/// Assembled application plus the receiving end of the router.
pub struct WiredApp {
    pub app: App,
    pub navigation: mpsc::UnboundedReceiver<Destination>,
    pub store_dir: PathBuf,
}

/// Key-value store directory: configured path, else `<app_data_root>/store`.
fn resolve_store_dir(config: &AppConfig, app_dirs: &dyn AppDirsPort) -> WiringResult<PathBuf> {
    if !config.data_dir.as_os_str().is_empty() {
        return Ok(config.data_dir.clone());
    }
    let dirs = app_dirs.get_app_dirs()?;
    Ok(AppPaths::from_app_dirs(&dirs).store_dir)
}

/// Wire every port into an [`App`].
/// 将所有端口注入 [`App`]。
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<WiredApp> {
    wire_dependencies_with_dirs(config, &DirsAppDirsAdapter::new())
}

pub fn wire_dependencies_with_dirs(
    config: &AppConfig,
    app_dirs: &dyn AppDirsPort,
) -> WiringResult<WiredApp> {
    let store_dir = resolve_store_dir(config, app_dirs)?;
    let (router, navigation) = ChannelRouter::new();

    let deps = AppDeps {
        store: Arc::new(FileKeyValueStore::new(store_dir.clone())),
        biometric_probe: Arc::new(StaticBiometricProbe::from_config(config)),
        router: Arc::new(router),
        auth_provider: Arc::new(DisconnectedAuthProvider::new()),
        events: Arc::new(DisconnectedEventsProvider::new()),
        unlock_policy: UnlockPolicy::from_config(config.max_unlock_attempts),
    };

    Ok(WiredApp {
        app: App::new(deps),
        navigation,
        store_dir,
    })
}
