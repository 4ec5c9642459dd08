//! # ev-core
//!
//! Core domain models and business rules for Eventra.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod app_dirs;
pub mod biometric;
pub mod bootstrap;
pub mod config;
pub mod credentials;
pub mod events;
pub mod ids;
pub mod locale;
pub mod ports;
pub mod session;
pub mod storage_key;
pub mod unlock;

// Re-export commonly used types at the crate root
pub use biometric::{BiometricCapability, BiometricModality};
pub use bootstrap::{BootstrapBarrier, BootstrapSignal, Destination, RoutingDecision};
pub use config::AppConfig;
pub use events::{Event, ViewType};
pub use ids::{EventId, UserId};
pub use locale::{Language, LayoutDirection};
pub use session::Session;
pub use storage_key::StorageKey;
