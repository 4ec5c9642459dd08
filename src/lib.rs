//! Eventra launch shell
//!
//! Loads configuration, initialises tracing, wires the adapters and runs the
//! launch sequence headlessly.

pub mod bootstrap;

pub use bootstrap::{load_config, run_launch, LaunchReport};
