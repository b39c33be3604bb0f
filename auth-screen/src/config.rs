//! Identity provider configuration.
//!
//! The provider project's credentials are injected into
//! [`IdentityClient::new`](crate::services::identity::IdentityClient::new) rather than
//! living in a module-level constant, so tests can point the gateway at a mock server.
//!
//! Environment variables:
//! - `IDENTITY_API_KEY` (required): web API key of the provider project
//! - `IDENTITY_PROJECT_ID`: project identifier, informational
//! - `IDENTITY_AUTH_DOMAIN`: auth domain, informational
//! - `IDENTITY_BASE_URL`: REST base URL (default: `https://identitytoolkit.googleapis.com/v1`)
//! - `IDENTITY_TIMEOUT_SECS`: per-request timeout (default: 10)

use lib_utils::envs::{get_env, get_env_or, get_env_parse_or};

use crate::core::error::{AppError, Result};

pub const DEFAULT_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
const MAX_TIMEOUT_SECS: u64 = 120;

#[derive(Clone, PartialEq, Eq)]
pub struct IdentityConfig {
    pub api_key: String,
    pub project_id: String,
    pub auth_domain: String,
    pub base_url: String,
    pub request_timeout_secs: u64,
}

impl IdentityConfig {
    /// Config for the public endpoint with the given key and default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            project_id: String::new(),
            auth_domain: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Same config aimed at a different REST root (mock servers, emulators).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn from_env() -> Result<Self> {
        let config = Self {
            api_key: get_env("IDENTITY_API_KEY")?,
            project_id: get_env_or("IDENTITY_PROJECT_ID", ""),
            auth_domain: get_env_or("IDENTITY_AUTH_DOMAIN", ""),
            base_url: get_env_or("IDENTITY_BASE_URL", DEFAULT_BASE_URL),
            request_timeout_secs: get_env_parse_or("IDENTITY_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(AppError::Config("IDENTITY_API_KEY must not be empty".to_string()));
        }

        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "IDENTITY_BASE_URL must be an http(s) URL, got {:?}",
                self.base_url
            )));
        }

        if self.request_timeout_secs == 0 || self.request_timeout_secs > MAX_TIMEOUT_SECS {
            return Err(AppError::Config(format!(
                "IDENTITY_TIMEOUT_SECS must be between 1 and {MAX_TIMEOUT_SECS}"
            )));
        }

        Ok(())
    }

    /// Full URL of an `accounts:*` endpoint, without the key query parameter.
    pub fn endpoint(&self, action: &str) -> String {
        format!("{}/accounts:{}", self.base_url.trim_end_matches('/'), action)
    }
}

// The API key stays out of Debug output.
impl std::fmt::Debug for IdentityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityConfig")
            .field("project_id", &self.project_id)
            .field("auth_domain", &self.auth_domain)
            .field("base_url", &self.base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish_non_exhaustive()
    }
}
