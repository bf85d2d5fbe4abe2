//! Environment record and its loaders.

use std::{env, fs, path::Path};

use serde::{Deserialize, Serialize};
use url::Url;
use validator::{Validate, ValidationError};

use crate::constants::{
    parse_flag, ALLOWED_URL_SCHEMES, AUTH0_DOMAIN_SUFFIX, AUTH0_RESPONSE_TYPE,
    DEFAULT_API_SERVER_URL, DEFAULT_AUTH0_AUDIENCE, DEFAULT_AUTH0_CALLBACK_URL,
    DEFAULT_AUTH0_CLIENT_ID, DEFAULT_AUTH0_URL, DEFAULT_PRODUCTION, ENV_API_SERVER_URL,
    ENV_AUTH0_AUDIENCE, ENV_AUTH0_CALLBACK_URL, ENV_AUTH0_CLIENT_ID, ENV_AUTH0_URL,
    ENV_PRODUCTION,
};
use crate::error::{format_validation_errors, EnvError, EnvResult};

/// Frontend environment configuration.
///
/// Serializes to the shape the frontend consumes:
/// `{ production, apiServerUrl, auth0: { url, audience, clientId, callbackURL } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Environment {
    /// Build mode flag
    pub production: bool,
    /// Base address for all backend requests
    #[validate(custom(function = "not_blank", message = "apiServerUrl is required"))]
    pub api_server_url: String,
    /// Identity provider parameters
    #[validate(nested)]
    pub auth0: Auth0Config,
}

/// Auth0 parameters passed verbatim to the identity-provider integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Auth0Config {
    /// Tenant prefix or fully qualified tenant domain
    #[validate(custom(function = "not_blank", message = "auth0.url is required"))]
    pub url: String,
    /// API identifier issued tokens must target
    #[validate(custom(function = "not_blank", message = "auth0.audience is required"))]
    pub audience: String,
    /// Public client identifier
    #[validate(custom(function = "not_blank", message = "auth0.clientId is required"))]
    pub client_id: String,
    /// Where the provider redirects after login
    #[serde(rename = "callbackURL")]
    #[validate(custom(function = "not_blank", message = "auth0.callbackURL is required"))]
    pub callback_url: String,
}

impl Default for Environment {
    fn default() -> Self {
        Self::development()
    }
}

impl Environment {
    /// The compiled-in development record.
    pub fn development() -> Self {
        Self {
            production: DEFAULT_PRODUCTION,
            api_server_url: DEFAULT_API_SERVER_URL.to_string(),
            auth0: Auth0Config {
                url: DEFAULT_AUTH0_URL.to_string(),
                audience: DEFAULT_AUTH0_AUDIENCE.to_string(),
                client_id: DEFAULT_AUTH0_CLIENT_ID.to_string(),
                callback_url: DEFAULT_AUTH0_CALLBACK_URL.to_string(),
            },
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `.env` if present, then overrides the development defaults
    /// with any of `PRODUCTION`, `API_SERVER_URL`, `AUTH0_URL`,
    /// `AUTH0_AUDIENCE`, `AUTH0_CLIENT_ID` and `AUTH0_CALLBACK_URL`.
    pub fn from_env() -> EnvResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_fallible_source(read_var)
    }

    /// Apply overrides from an arbitrary variable lookup, then validate.
    pub fn from_source<F>(lookup: F) -> EnvResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::from_fallible_source(|key| Ok(lookup(key)))
    }

    fn from_fallible_source<F>(lookup: F) -> EnvResult<Self>
    where
        F: Fn(&str) -> EnvResult<Option<String>>,
    {
        let mut environment = Self::development();

        let overridden = |key: &str| -> EnvResult<Option<String>> {
            Ok(lookup(key)?.inspect(|_| tracing::debug!(variable = key, "Overriding default")))
        };

        if let Some(value) = overridden(ENV_PRODUCTION)? {
            environment.production =
                parse_flag(&value).ok_or_else(|| EnvError::invalid_flag(ENV_PRODUCTION, value))?;
        }
        if let Some(value) = overridden(ENV_API_SERVER_URL)? {
            environment.api_server_url = value;
        }
        if let Some(value) = overridden(ENV_AUTH0_URL)? {
            environment.auth0.url = value;
        }
        if let Some(value) = overridden(ENV_AUTH0_AUDIENCE)? {
            environment.auth0.audience = value;
        }
        if let Some(value) = overridden(ENV_AUTH0_CLIENT_ID)? {
            environment.auth0.client_id = value;
        }
        if let Some(value) = overridden(ENV_AUTH0_CALLBACK_URL)? {
            environment.auth0.callback_url = value;
        }

        environment.validate()?;
        Ok(environment)
    }

    /// Parse the record from its JSON shape and validate it.
    pub fn from_json_str(json: &str) -> EnvResult<Self> {
        let environment: Self = serde_json::from_str(json)?;
        environment.validate()?;
        Ok(environment)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> EnvResult<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "Reading configuration file");
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check every documented invariant.
    ///
    /// # Errors
    /// Returns `Validation` for blank fields and `InvalidUrl` when
    /// `apiServerUrl` or `auth0.callbackURL` is not an absolute http(s) URL,
    /// or when `auth0.url` does not name a bare tenant host.
    pub fn validate(&self) -> EnvResult<()> {
        Validate::validate(self).map_err(|e| EnvError::validation(format_validation_errors(&e)))?;
        parse_absolute_url("apiServerUrl", &self.api_server_url)?;
        parse_absolute_url("auth0.callbackURL", &self.auth0.callback_url)?;
        self.auth0.validate_tenant()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.production
    }

    /// Serialize in the frontend's JSON shape.
    pub fn to_json_pretty(&self) -> EnvResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_json(&self) -> EnvResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parsed `apiServerUrl`.
    pub fn api_server(&self) -> EnvResult<Url> {
        parse_absolute_url("apiServerUrl", &self.api_server_url)
    }

    /// Resolve a request path against `apiServerUrl`.
    ///
    /// Leading slashes are ignored so a base path such as `/api` is kept:
    /// `http://host/api` + `/drinks` gives `http://host/api/drinks`.
    ///
    /// # Errors
    /// Absolute URLs and `..` segments are rejected since they would
    /// leave the API server's base path.
    pub fn api_url(&self, path: &str) -> EnvResult<Url> {
        if Url::parse(path).is_ok() {
            return Err(EnvError::invalid_url(
                "path",
                "absolute URL where a request path was expected",
            ));
        }
        let request_path = path.split(['?', '#']).next().unwrap_or_default();
        if request_path.split(['/', '\\']).any(is_parent_segment) {
            return Err(EnvError::invalid_url("path", "parent directory segment"));
        }

        let mut base = self.api_server()?;
        if !base.path().ends_with('/') {
            let with_slash = format!("{}/", base.path());
            base.set_path(&with_slash);
        }
        base.join(path.trim_start_matches('/'))
            .map_err(|e| EnvError::invalid_url("apiServerUrl", e))
    }
}

impl Auth0Config {
    /// Tenant domain. A bare prefix expands to `{url}.auth0.com`.
    pub fn domain(&self) -> String {
        if self.url.contains('.') {
            self.url.clone()
        } else {
            format!("{}.{}", self.url, AUTH0_DOMAIN_SUFFIX)
        }
    }

    /// Expected `iss` claim of issued tokens.
    pub fn issuer(&self) -> EnvResult<Url> {
        self.tenant_url("/")
    }

    pub fn jwks_url(&self) -> EnvResult<Url> {
        self.tenant_url("/.well-known/jwks.json")
    }

    pub fn token_url(&self) -> EnvResult<Url> {
        self.tenant_url("/oauth/token")
    }

    /// Login link for the implicit flow, redirecting back to `callbackURL`.
    pub fn authorize_url(&self) -> EnvResult<Url> {
        let mut url = self.tenant_url("/authorize")?;
        url.query_pairs_mut()
            .append_pair("audience", &self.audience)
            .append_pair("response_type", AUTH0_RESPONSE_TYPE)
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", &self.callback_url);
        Ok(url)
    }

    pub fn logout_url(&self) -> EnvResult<Url> {
        let mut url = self.tenant_url("/v2/logout")?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("returnTo", &self.callback_url);
        Ok(url)
    }

    /// `auth0.url` must be a tenant prefix or a bare host name, with no
    /// scheme, port, path or whitespace.
    fn validate_tenant(&self) -> EnvResult<()> {
        if self
            .url
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, ':' | '/' | '\\' | '?' | '#' | '@'))
        {
            return Err(EnvError::invalid_url(
                "auth0.url",
                "expected a tenant name or host, not a URL",
            ));
        }

        let domain = self.domain();
        let issuer = self.issuer()?;
        match issuer.host_str() {
            Some(host) if host.eq_ignore_ascii_case(&domain) => Ok(()),
            _ => Err(EnvError::invalid_url(
                "auth0.url",
                format!("{:?} is not a valid host name", domain),
            )),
        }
    }

    fn tenant_url(&self, path: &str) -> EnvResult<Url> {
        Url::parse(&format!("https://{}{}", self.domain(), path))
            .map_err(|e| EnvError::invalid_url("auth0.url", e))
    }
}

/// Read an environment variable, failing on values that are not UTF-8.
pub(crate) fn read_var(key: &str) -> EnvResult<Option<String>> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(EnvError::validation(format!(
            "{} is not valid UTF-8",
            key
        ))),
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// `..`, including its percent-encoded forms.
fn is_parent_segment(segment: &str) -> bool {
    segment.to_ascii_lowercase().replace("%2e", ".") == ".."
}

/// Parse `value` as an absolute http(s) URL with a non-empty host.
pub fn parse_absolute_url(field: &str, value: &str) -> EnvResult<Url> {
    let url = Url::parse(value).map_err(|e| EnvError::invalid_url(field, e))?;

    if !ALLOWED_URL_SCHEMES.contains(&url.scheme()) {
        return Err(EnvError::invalid_url(
            field,
            format!("unsupported scheme {:?}", url.scheme()),
        ));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(EnvError::invalid_url(field, "missing host"));
    }

    Ok(url)
}
