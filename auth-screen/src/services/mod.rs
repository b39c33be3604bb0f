//! # Services Module
//!
//! External service integrations.
//!
//! ```text
//! services/
//! └── identity/    - Identity Toolkit REST client
//!                    (sign-up, sign-in, profile update, password reset)
//! ```

pub mod identity;

pub use identity::IdentityClient;
