//! # Identity Client
//!
//! Connection-pooled HTTP client bound to one provider project.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::IdentityConfig;
use crate::core::error::{self, AppError, GatewayError};
use crate::core::service::{AuthGateway, AuthUser};

/// HTTP gateway to the identity provider.
pub struct IdentityClient {
    pub(crate) http: Client,
    pub(crate) config: IdentityConfig,
}

impl IdentityClient {
    /// Build a client with the configured per-request timeout.
    pub fn new(config: IdentityConfig) -> error::Result<Self> {
        config.validate()?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {e}")))?;

        tracing::debug!(config = ?config, "Identity client created");
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &IdentityConfig {
        &self.config
    }
}

#[async_trait]
impl AuthGateway for IdentityClient {
    async fn create_account(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<AuthUser, GatewayError> {
        super::auth::sign_up(self, email, password, name).await
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<AuthUser, GatewayError> {
        super::auth::sign_in(self, email, password).await
    }

    async fn request_password_reset(&self, email: &str) -> Result<(), GatewayError> {
        super::auth::send_password_reset(self, email).await
    }
}
