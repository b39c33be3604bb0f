//! # Shared Identity DTO Library
//!
//! This library defines the wire contract between the auth screen and the identity
//! provider's REST surface (Firebase Auth / Identity Toolkit v1).
//! All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for provider communication
//!   - **[`dto::auth`]**: Sign-up, sign-in, profile update and out-of-band code DTOs
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::mask_email`]**: Redact an email address for log output
//!
//! ## Wire Format
//!
//! The provider speaks **camelCase** JSON, so every DTO carries
//! `#[serde(rename_all = "camelCase")]`. Optional response fields use `#[serde(default)]`
//! because the provider omits them rather than sending `null`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use shared::dto::auth::{PasswordSignInRequest, SignInResponse};
//!
//! # async fn demo() -> Result<(), reqwest::Error> {
//! let request = PasswordSignInRequest::new("ann@example.com", "secret1");
//!
//! let response: SignInResponse = reqwest::Client::new()
//!     .post("https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword?key=KEY")
//!     .json(&request)
//!     .send()
//!     .await?
//!     .json()
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
