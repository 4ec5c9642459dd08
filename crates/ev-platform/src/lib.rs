pub mod app_dirs;
pub mod biometric;
pub mod router;
pub mod splash;

pub use app_dirs::DirsAppDirsAdapter;
pub use biometric::StaticBiometricProbe;
pub use router::ChannelRouter;
pub use splash::SplashTimer;
