pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, load_config_or_empty};
pub use run::{run_launch, LaunchReport};
pub use wiring::{wire_dependencies, WiredApp, WiringError};
