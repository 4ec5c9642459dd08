//! Launch routing domain.
//!
//! Decides, exactly once per launch, which top-level destination the user
//! lands on. The [`BootstrapBarrier`] is a pure join over the launch signals;
//! the async plumbing that feeds it lives in the application layer.

pub mod barrier;
pub mod decision;

pub use barrier::{BootstrapBarrier, BootstrapPhase, BootstrapSignal};
pub use decision::{Destination, RoutingDecision};
