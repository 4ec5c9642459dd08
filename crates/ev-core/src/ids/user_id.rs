use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifier assigned to an account by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl_id!(UserId);
