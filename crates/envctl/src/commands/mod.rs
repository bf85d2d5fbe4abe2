//! Commands module - CLI command implementations.

pub mod check;
pub mod show;
pub mod urls;
