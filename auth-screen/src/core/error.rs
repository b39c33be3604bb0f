//! # Common Error Types
//!
//! Consolidated error handling for the auth screen.
//!
//! ## Error Categories
//!
//! - [`GatewayError`]: what an [`AuthGateway`](crate::core::service::AuthGateway) call can
//!   settle with when it does not succeed
//!   - **Rejected**: the provider answered with an error message (wrong password, email
//!     already in use, ...). Shown verbatim to the user.
//!   - **Unexpected**: the call itself failed (network, malformed response, panic inside
//!     the gateway future). Shown as a generic failure.
//! - [`AppError`]: application-level failures outside a single gateway call
//!   - **Config**: missing or malformed provider configuration
//!   - **Window**: the native window could not be opened
//!
//! ## Usage Pattern
//!
//! ```rust
//! use auth_screen::core::error::GatewayError;
//!
//! let rejected = GatewayError::Rejected("The password is invalid.".to_string());
//! assert_eq!(rejected.to_string(), "The password is invalid.");
//! assert!(!rejected.is_unexpected());
//! ```

use thiserror::Error;

/// Failure of a single gateway operation.
///
/// `Rejected` carries the provider's user-facing message. `Unexpected` carries a
/// diagnostic string that is logged but never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The provider returned an error value for this request.
    #[error("{0}")]
    Rejected(String),

    /// The request could not be completed at all.
    #[error("unexpected gateway failure: {0}")]
    Unexpected(String),
}

impl GatewayError {
    pub fn is_unexpected(&self) -> bool {
        matches!(self, GatewayError::Unexpected(_))
    }
}

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Provider configuration could not be loaded or is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use auth_screen::core::error::AppError;
    ///
    /// let err = AppError::Config("IDENTITY_API_KEY must be set".to_string());
    /// assert_eq!(err.to_string(), "Config error: IDENTITY_API_KEY must be set");
    /// ```
    #[error("Config error: {0}")]
    Config(String),

    /// The native window could not be created or its event loop failed.
    #[error("Window error: {0}")]
    Window(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<lib_utils::envs::Error> for AppError {
    fn from(err: lib_utils::envs::Error) -> Self {
        match err {
            lib_utils::envs::Error::MissingEnv(name) => {
                AppError::Config(format!("{name} must be set"))
            }
            lib_utils::envs::Error::WrongFormat(name) => {
                AppError::Config(format!("{name} has an invalid format"))
            }
        }
    }
}
