//! Authenticated identity model.
//!
//! A [`Session`] is opaque beyond its identifier and optional profile fields.
//! It is created when sign-in or sign-up succeeds and destroyed on logout.

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

/// Fallback shown when a session carries neither a name nor an email.
pub const ANONYMOUS_DISPLAY_NAME: &str = "User";

/// Authenticated identity persisted under [`crate::StorageKey::User`].
///
/// 已认证的用户身份。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Session {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            display_name: None,
            email: None,
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Name to greet the user with.
    ///
    /// Prefers the profile name, then the local part of the email address,
    /// then [`ANONYMOUS_DISPLAY_NAME`].
    pub fn greeting_name(&self) -> String {
        if let Some(name) = self
            .display_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
        {
            return name.to_string();
        }

        self.email
            .as_deref()
            .and_then(|email| email.split('@').next())
            .map(str::trim)
            .filter(|local| !local.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| ANONYMOUS_DISPLAY_NAME.to_string())
    }
}
