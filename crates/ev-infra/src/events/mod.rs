//! Event discovery adapters.

pub mod disconnected;

pub use disconnected::DisconnectedEventsProvider;
