//! Session state and the services that act on it.
//!
//! - [`Session`] and [`SessionManager`] hold per-browser records and counters
//! - `services` implements sample entry and review edits

pub mod services;
mod session;

pub use session::{today, ResolvedSession, Session, SessionManager};
