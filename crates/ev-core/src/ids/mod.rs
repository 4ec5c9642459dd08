//! ID type wrappers for type safety.

pub mod event_id;
mod id_macro;
pub mod user_id;

pub use event_id::EventId;
pub use user_id::UserId;
