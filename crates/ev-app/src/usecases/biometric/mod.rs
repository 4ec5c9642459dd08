pub mod enable;
pub mod preference;
pub mod unlock;

pub use enable::{EnableBiometric, EnableBiometricError};
pub use preference::BiometricPreference;
pub use unlock::BiometricUnlock;
