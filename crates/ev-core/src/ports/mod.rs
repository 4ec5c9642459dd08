//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and infrastructure implementations. This follows Hexagonal Architecture
//! principles, allowing the core business logic to remain independent of
//! external dependencies.
//!
//! ## Port Placement Guidelines
//!
//! Before adding a new port to `ev-core/ports`, ask yourself three questions:
//!
//! 1. **Does this port represent a business capability?**
//! 2. **Will it be depended upon by multiple use cases or domains?**
//! 3. **Is it implemented by the infrastructure or platform layer?**
//!
//! If all three answers are **yes**, place it in `ev-core/ports`.
//! Otherwise, place it in the relevant `domain` submodule.

pub mod app_dirs;
pub mod auth_provider;
pub mod biometric_probe;
pub mod errors;
pub mod events;
pub mod key_value_store;
pub mod router;

pub use app_dirs::AppDirsPort;
pub use auth_provider::AuthProviderPort;
pub use biometric_probe::{BiometricProbePort, BiometricPrompt};
pub use errors::{AppDirsError, AuthProviderError, EventsError, PersistenceError, ProbeError};
pub use events::{EventsPort, GetEventsParams};
pub use key_value_store::{read_json, write_json, KeyValueStorePort};
pub use router::RouterPort;
