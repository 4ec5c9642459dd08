//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - Read TOML configuration files / 读取 TOML 配置文件
//! - Parse TOML into AppConfig DTO / 将 TOML 解析为 AppConfig DTO
//! - Report I/O and parsing errors with context / 报告带上下文的 I/O 和解析错误
//!
//! ## Prohibited / 禁止事项
//!
//! **No validation logic / 禁止验证逻辑**
//! **No default value logic / 禁止默认值逻辑**
//!
//! > **Pure data loading only. Accept whatever is in the file.**
//! > **仅纯数据加载。接受文件中的任何内容。**

use std::path::{Path, PathBuf};

use anyhow::Context;
use ev_core::config::AppConfig;

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// Missing sections result in empty values (facts).
/// 缺失的部分导致空值（事实）。
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// `AppConfig::empty()` when no path is given.
///
/// An explicit path must exist; a missing file is an error like in
/// [`load_config`].
pub fn load_config_or_empty(config_path: Option<&Path>) -> anyhow::Result<AppConfig> {
    match config_path {
        Some(path) => load_config(path.to_path_buf()),
        None => Ok(AppConfig::empty()),
    }
}
