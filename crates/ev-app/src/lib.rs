//! Eventra Application Orchestration Layer
//!
//! This crate contains business logic use cases and the launch orchestration.

pub mod app;
pub mod app_paths;
pub mod deps;
pub mod session_store;
pub mod usecases;

pub use app::App;
pub use deps::AppDeps;
pub use session_store::{SessionSnapshot, SessionStore};
