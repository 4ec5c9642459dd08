//! Business logic use cases
//!
//! [Launch]
//!   BootstrapSequencer  -> Auth | BiometricUnlock | App
//! [Auth stack]
//!   SignIn / SignUp     -> (EnableBiometric offer) -> App
//! [BiometricUnlock]
//!   BiometricUnlock     -> App | Auth
//! [App]
//!   SearchEvents (grid | map), GetProfileSummary, Logout -> Auth, LanguagePreference

pub mod auth;
pub mod biometric;
pub mod bootstrap;
pub mod events;
pub mod language;
pub mod profile;

#[cfg(test)]
pub(crate) mod test_support;

pub use auth::{Logout, LogoutError, PostSignUp, SignIn, SignInError, SignUp, SignUpError};
pub use biometric::{BiometricPreference, BiometricUnlock, EnableBiometric, EnableBiometricError};
pub use bootstrap::BootstrapSequencer;
pub use events::{EventSearchResults, NoResults, SearchEvents, SearchEventsError};
pub use language::LanguagePreference;
pub use profile::{GetProfileSummary, ProfileError, ProfileSummary};
