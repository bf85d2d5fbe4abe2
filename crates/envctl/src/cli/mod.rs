//! CLI module - Command-line interface for inspecting the environment.
//!
//! Provides commands for:
//! - `show` - Print the record as JSON
//! - `check` - Validate the record
//! - `login-url` - Print the Auth0 login link
//! - `endpoint` - Resolve a backend request path

pub mod args;

pub use args::{Cli, Commands};
