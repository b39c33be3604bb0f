//! # Service Traits
//!
//! Traits for dependency injection at the two edges of the form controller: the identity
//! provider ([`AuthGateway`]) and the toast layer ([`NotificationSink`]). Production code
//! plugs in [`IdentityClient`](crate::services::identity::IdentityClient) and
//! [`NotificationManager`](crate::ui::widgets::notifications::NotificationManager); tests
//! plug in scripted doubles.

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::core::error::GatewayError;

/// Signed-in account as reported by the provider.
///
/// Held only long enough to greet the user; never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub id_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

impl AuthUser {
    /// Name to greet the user with: display name when set, email otherwise.
    pub fn greeting_name(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(self.email.as_str())
    }
}

// Tokens stay out of Debug output so the struct can be logged safely.
impl fmt::Debug for AuthUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthUser")
            .field("uid", &self.uid)
            .field("email", &shared::mask_email(&self.email))
            .field("display_name", &self.display_name)
            .field("expires_at", &self.expires_at)
            .finish_non_exhaustive()
    }
}

/// Boundary to the external identity provider.
///
/// Every operation settles exactly once. A returned `Err(GatewayError::Rejected)` is the
/// provider saying no; `Err(GatewayError::Unexpected)` means the call itself broke.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Create an account and attach `name` as its display name.
    async fn create_account(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<AuthUser, GatewayError>;

    /// Sign in with email and password.
    async fn authenticate(&self, email: &str, password: &str) -> Result<AuthUser, GatewayError>;

    /// Ask the provider to email a password reset link.
    async fn request_password_reset(&self, email: &str) -> Result<(), GatewayError>;
}

/// Presentation style of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationVariant {
    /// Neutral or success
    #[default]
    Default,
    /// Error
    Destructive,
}

/// One user-visible toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NotificationVariant::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NotificationVariant::Destructive
    }
}

/// Fire-and-forget notification output.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

impl NotificationSink for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}
