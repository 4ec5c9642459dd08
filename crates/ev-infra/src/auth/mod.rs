//! Auth provider adapters.

pub mod disconnected;

pub use disconnected::DisconnectedAuthProvider;
