//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the identity provider's REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Account creation, password sign-in, profile update, password reset
//!
//! ## Serialization Format
//!
//! - **Field naming**: camelCase, matching the provider
//! - **Optional fields**: Omitted when `None` via
//!   `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Errors**: A single envelope, [`auth::ErrorResponse`], for every endpoint
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /v1/accounts:signInWithPassword?key=API_KEY
//! Content-Type: application/json
//!
//! {
//!   "email": "ann@example.com",
//!   "password": "secret1",
//!   "returnSecureToken": true
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 400 Bad Request
//! Content-Type: application/json
//!
//! {
//!   "error": {
//!     "code": 400,
//!     "message": "INVALID_LOGIN_CREDENTIALS",
//!     "errors": [
//!       { "message": "INVALID_LOGIN_CREDENTIALS", "domain": "global", "reason": "invalid" }
//!     ]
//!   }
//! }
//! ```

pub mod auth;

pub use auth::*;
