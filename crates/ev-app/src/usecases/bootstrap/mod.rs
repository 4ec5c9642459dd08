//! Launch routing.

pub mod sequencer;

pub use sequencer::BootstrapSequencer;
