//! Keys used in the persistent key-value store.

use std::fmt::{Display, Formatter};

/// Named slots in the persistent key-value store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    /// Serialized [`crate::Session`].
    User,
    /// Boolean flag set when the user enables biometric unlock.
    BiometricEnabled,
    /// Locale tag chosen by the user.
    Language,
}

impl StorageKey {
    pub const ALL: [StorageKey; 3] = [Self::User, Self::BiometricEnabled, Self::Language];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::BiometricEnabled => "BIOMETRIC_ENABLED",
            Self::Language => "LANGUAGE",
        }
    }
}

impl Display for StorageKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_are_stable() {
        let names: Vec<&str> = StorageKey::ALL.iter().map(StorageKey::as_str).collect();
        assert_eq!(names, vec!["USER", "BIOMETRIC_ENABLED", "LANGUAGE"]);
    }
}
