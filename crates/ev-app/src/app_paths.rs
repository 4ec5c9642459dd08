use std::path::PathBuf;

use ev_core::app_dirs::AppDirs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub store_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            store_dir: dirs.app_data_root.join("store"),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }
}
