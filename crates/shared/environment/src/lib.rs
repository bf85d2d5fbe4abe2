//! Frontend environment configuration.
//!
//! This crate provides:
//! - The environment record (`production`, `apiServerUrl`, `auth0.*`)
//! - Development defaults and deployment overrides (env vars, `.env`, JSON)
//! - Invariant checks for the record
//! - A process-wide read-only instance
//! - Derived Auth0 endpoints (authorize, token, JWKS, logout)

pub mod constants;
pub mod error;
pub mod settings;

use once_cell::sync::OnceCell;

pub use error::{EnvError, EnvResult};
pub use settings::{parse_absolute_url, Auth0Config, Environment};

static ENVIRONMENT: OnceCell<Environment> = OnceCell::new();

/// Install the process-wide environment record.
///
/// # Errors
/// Fails with `AlreadyInitialized` if a record was installed earlier or
/// `get()` already fell back to the development defaults.
pub fn init(environment: Environment) -> EnvResult<&'static Environment> {
    environment.validate()?;
    ENVIRONMENT
        .set(environment)
        .map_err(|_| EnvError::AlreadyInitialized)?;
    tracing::info!("Environment initialized");
    ENVIRONMENT.get().ok_or(EnvError::AlreadyInitialized)
}

/// The process-wide environment record.
///
/// Falls back to `Environment::development()` when `init` was never called.
pub fn get() -> &'static Environment {
    ENVIRONMENT.get_or_init(|| {
        tracing::debug!("No environment installed, using development defaults");
        Environment::development()
    })
}
