use std::path::PathBuf;

use ev_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "eventra";

fn resolved_app_dir_name() -> String {
    match std::env::var("EV_PROFILE") {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

pub struct DirsAppDirsAdapter {
    base_data_local_dir_override: Option<PathBuf>,
}

impl Default for DirsAppDirsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl DirsAppDirsAdapter {
    pub fn new() -> Self {
        Self {
            base_data_local_dir_override: None,
        }
    }

    /// Use `base` instead of the system data-local directory.
    pub fn with_base_data_local_dir(base: PathBuf) -> Self {
        Self {
            base_data_local_dir_override: Some(base),
        }
    }

    /// Overridden base directory, else `dirs::data_local_dir()`.
    pub fn base_data_local_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_data_local_dir_override {
            return Some(base.clone());
        }
        dirs::data_local_dir()
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    /// `app_data_root` is the base data-local directory joined with `eventra`
    /// (or `eventra-<EV_PROFILE>`).
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base_data = self
            .base_data_local_dir()
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;

        Ok(AppDirs {
            app_data_root: base_data.join(resolved_app_dir_name()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static EV_PROFILE_ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_ev_profile<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let _guard = EV_PROFILE_ENV_LOCK.lock().unwrap();
        let previous = std::env::var("EV_PROFILE").ok();

        match value {
            Some(profile) => std::env::set_var("EV_PROFILE", profile),
            None => std::env::remove_var("EV_PROFILE"),
        }

        let result = f();

        match previous {
            Some(profile) => std::env::set_var("EV_PROFILE", profile),
            None => std::env::remove_var("EV_PROFILE"),
        }

        result
    }

    #[test]
    fn adapter_appends_eventra_dir_name() {
        with_ev_profile(None, || {
            let adapter = DirsAppDirsAdapter::with_base_data_local_dir(PathBuf::from("/tmp"));
            let dirs = adapter.get_app_dirs().unwrap();
            assert_eq!(dirs.app_data_root, PathBuf::from("/tmp/eventra"));
        });
    }

    #[test]
    fn adapter_isolates_dirs_per_profile() {
        let dirs_a = with_ev_profile(Some("a"), || {
            DirsAppDirsAdapter::with_base_data_local_dir(PathBuf::from("/tmp"))
                .get_app_dirs()
                .unwrap()
        });
        let dirs_b = with_ev_profile(Some("b"), || {
            DirsAppDirsAdapter::with_base_data_local_dir(PathBuf::from("/tmp"))
                .get_app_dirs()
                .unwrap()
        });

        assert_eq!(dirs_a.app_data_root, PathBuf::from("/tmp/eventra-a"));
        assert_eq!(dirs_b.app_data_root, PathBuf::from("/tmp/eventra-b"));
    }

    #[test]
    fn empty_profile_uses_default_name() {
        with_ev_profile(Some(""), || {
            let dirs = DirsAppDirsAdapter::with_base_data_local_dir(PathBuf::from("/tmp"))
                .get_app_dirs()
                .unwrap();
            assert_eq!(dirs.app_data_root, PathBuf::from("/tmp/eventra"));
        });
    }
}
