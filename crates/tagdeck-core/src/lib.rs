//! Core tagdeck library (config, logging, and the external boundaries the
//! entry panel talks to: locations, identity, tenant configuration).

pub mod config;
pub mod error;
pub mod identity;
pub mod location;
pub mod logging;
pub mod tenant;
