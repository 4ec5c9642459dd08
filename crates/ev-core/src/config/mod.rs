//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML -> DTO mapping
//!
//! ## Prohibited
//!
//! - No business logic or policies
//! - No validation logic
//! - No default value calculation
//!
//! Zero values are facts. Callers decide what an empty `data_dir` or a zero
//! `max_unlock_attempts` means.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
///
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Key-value store directory (may be empty)
    pub data_dir: PathBuf,

    /// Entry animation length in milliseconds
    pub splash_duration_ms: u64,

    /// Biometric unlock retry cap
    pub max_unlock_attempts: u32,

    /// Modality reported by the headless probe (`none` or empty = no hardware)
    pub simulated_modality: String,

    /// Whether the headless probe reports an enrolled credential
    pub simulated_enrolled: bool,

    /// Device language tag used when no preference is persisted
    pub device_language: String,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation
    /// or default value logic.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let section = |name: &str, key: &str| lookup(toml_value, name, key);

        Ok(Self {
            data_dir: PathBuf::from(
                section("storage", "data_dir")
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            splash_duration_ms: section("splash", "duration_ms")
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64)
                .unwrap_or(0),
            max_unlock_attempts: section("biometric", "max_unlock_attempts")
                .and_then(|v| v.as_integer())
                .map(|v| v.clamp(0, u32::MAX as i64) as u32)
                .unwrap_or(0),
            simulated_modality: section("biometric", "simulated_modality")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            simulated_enrolled: section("biometric", "simulated_enrolled")
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
            device_language: section("locale", "device_language")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            data_dir: PathBuf::new(),
            splash_duration_ms: 0,
            max_unlock_attempts: 0,
            simulated_modality: String::new(),
            simulated_enrolled: false,
            device_language: String::new(),
        }
    }
}

fn lookup<'a>(root: &'a toml::Value, section: &str, key: &str) -> Option<&'a toml::Value> {
    root.get(section).and_then(|s| s.get(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn from_toml_maps_every_section() {
        let toml_str = r#"
            [storage]
            data_dir = "/var/lib/eventra"

            [splash]
            duration_ms = 1800

            [biometric]
            max_unlock_attempts = 5
            simulated_modality = "face"
            simulated_enrolled = true

            [locale]
            device_language = "ar"
        "#;
        let value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&value).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/var/lib/eventra"));
        assert_eq!(config.splash_duration_ms, 1800);
        assert_eq!(config.max_unlock_attempts, 5);
        assert_eq!(config.simulated_modality, "face");
        assert!(config.simulated_enrolled);
        assert_eq!(config.device_language, "ar");
    }

    #[test]
    fn missing_sections_become_empty_facts() {
        let value: Value = toml::from_str("").unwrap();
        let config = AppConfig::from_toml(&value).unwrap();
        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn negative_numbers_are_clamped_not_rejected() {
        let value: Value = toml::from_str(
            r#"
            [splash]
            duration_ms = -10
            [biometric]
            max_unlock_attempts = -1
        "#,
        )
        .unwrap();
        let config = AppConfig::from_toml(&value).unwrap();
        assert_eq!(config.splash_duration_ms, 0);
        assert_eq!(config.max_unlock_attempts, 0);
    }
}
