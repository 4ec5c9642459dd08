//! Key-value store adapters.

pub mod file_store;
pub mod in_memory;

pub use file_store::FileKeyValueStore;
pub use in_memory::InMemoryKeyValueStore;
