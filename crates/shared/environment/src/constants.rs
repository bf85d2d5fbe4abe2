//! Development defaults and environment variable names.
//!
//! Centralized location for the literal values compiled into the frontend
//! build. Deployments override these through the variables listed below.

// =============================================================================
// Development Defaults
// =============================================================================

/// Build mode of the compiled-in record
pub const DEFAULT_PRODUCTION: bool = false;

/// Base URL of the locally running API server
pub const DEFAULT_API_SERVER_URL: &str = "http://127.0.0.1:5000";

/// Auth0 tenant prefix (expands to `setoapps.auth0.com`)
pub const DEFAULT_AUTH0_URL: &str = "setoapps";

/// Audience configured for the Auth0 API
pub const DEFAULT_AUTH0_AUDIENCE: &str = "coffee";

/// Public client id generated for the Auth0 application
pub const DEFAULT_AUTH0_CLIENT_ID: &str = "5uBXy4McPOt3F6hq9JwQG1JRrEJuBZhk";

/// Base URL of the locally running frontend
pub const DEFAULT_AUTH0_CALLBACK_URL: &str = "http://localhost:8100";

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_PRODUCTION: &str = "PRODUCTION";
pub const ENV_API_SERVER_URL: &str = "API_SERVER_URL";
pub const ENV_AUTH0_URL: &str = "AUTH0_URL";
pub const ENV_AUTH0_AUDIENCE: &str = "AUTH0_AUDIENCE";
pub const ENV_AUTH0_CLIENT_ID: &str = "AUTH0_CLIENT_ID";
pub const ENV_AUTH0_CALLBACK_URL: &str = "AUTH0_CALLBACK_URL";

// =============================================================================
// Identity Provider
// =============================================================================

/// Hosted domain suffix appended to a bare tenant prefix
pub const AUTH0_DOMAIN_SUFFIX: &str = "auth0.com";

/// Response type requested by the implicit login flow
pub const AUTH0_RESPONSE_TYPE: &str = "token";

/// URL schemes accepted for absolute URLs
pub const ALLOWED_URL_SCHEMES: &[&str] = &["http", "https"];

/// Parse a boolean flag value (`true/false`, `1/0`, `yes/no`, `on/off`).
pub fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
