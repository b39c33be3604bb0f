//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! ## Modules
//!
//! - **[`error`]**: Error types (`GatewayError`, `AppError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection (`AuthGateway`, `NotificationSink`)
//!
//! ## Dependency Injection
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use auth_screen::core::service::AuthGateway;
//!
//! // In production: the Identity Toolkit client
//! let gateway: Arc<dyn AuthGateway> = Arc::new(IdentityClient::new(config)?);
//!
//! // In tests: a scripted double
//! let gateway: Arc<dyn AuthGateway> = Arc::new(ScriptedGateway::default());
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, GatewayError, Result};
pub use service::{AuthGateway, AuthUser, Notification, NotificationSink, NotificationVariant};
