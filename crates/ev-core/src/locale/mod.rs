//! Language preference model.
//!
//! Translation tables live outside this crate; only the preference and the
//! layout direction it implies are modeled here.

use serde::{Deserialize, Serialize};

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ar,
}

/// Horizontal layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LayoutDirection {
    LeftToRight,
    RightToLeft,
}

impl Language {
    pub const FALLBACK: Language = Language::En;

    pub fn tag(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    /// Parse a persisted or device language tag. Only exact tags are accepted.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "en" => Some(Self::En),
            "ar" => Some(Self::Ar),
            _ => None,
        }
    }

    pub fn direction(&self) -> LayoutDirection {
        match self {
            Self::Ar => LayoutDirection::RightToLeft,
            Self::En => LayoutDirection::LeftToRight,
        }
    }

    pub fn is_rtl(&self) -> bool {
        self.direction() == LayoutDirection::RightToLeft
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::FALLBACK
    }
}
