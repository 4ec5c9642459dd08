pub mod auth;
pub mod events;
pub mod kv;

pub use auth::DisconnectedAuthProvider;
pub use events::DisconnectedEventsProvider;
pub use kv::{FileKeyValueStore, InMemoryKeyValueStore};
