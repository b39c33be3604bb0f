//! # Identity Provider Client
//!
//! HTTP client for the Identity Toolkit REST API, the surface behind hosted email and
//! password authentication.
//!
//! ## Module Structure
//!
//! ```text
//! identity/
//! ├── mod.rs      - Module exports and documentation
//! ├── client.rs   - IdentityClient struct and the AuthGateway impl
//! ├── auth.rs     - accounts:* endpoints (signUp, signInWithPassword, update, sendOobCode)
//! └── errors.rs   - Provider error codes to user-facing messages
//! ```
//!
//! Every endpoint takes the project's web API key as the `key` query parameter and a JSON
//! body. A non-2xx response carrying the provider's error envelope becomes
//! [`GatewayError::Rejected`](crate::core::GatewayError::Rejected); transport failures and
//! unreadable bodies become
//! [`GatewayError::Unexpected`](crate::core::GatewayError::Unexpected).

pub mod auth;
pub mod client;
pub mod errors;

pub use client::IdentityClient;
pub use errors::provider_message;
