//! Shared value types for tagdeck crates.
//!
//! These types cross crate boundaries (core boundaries, panel reducer, CLI
//! fixtures) and carry no behavior beyond small accessors.

mod auth;
mod entry;
mod location;

pub use auth::{AuthNotification, AuthState, Session, SessionData};
pub use entry::Entry;
pub use location::{ExtConfig, LocationConnection, LocationRecord};
