//! Feature slices for the entry panel (state/update per slice).

pub mod auth;
pub mod tabs;
