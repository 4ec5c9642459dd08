use serde::{Deserialize, Serialize};

/// How discovery results are presented.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    Map,
    #[default]
    Grid,
}

impl ViewType {
    /// The other presentation; the toggle button flips between the two.
    pub fn toggled(self) -> Self {
        match self {
            Self::Map => Self::Grid,
            Self::Grid => Self::Map,
        }
    }
}
