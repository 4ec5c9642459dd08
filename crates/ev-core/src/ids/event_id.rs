use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifier assigned to an event by the discovery API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl_id!(EventId);
