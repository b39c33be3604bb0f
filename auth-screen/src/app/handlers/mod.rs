//! # Event Handlers
//!
//! User action handlers. The auth form is the only screen, so there is one domain.

pub mod auth;

pub use auth::{ResetOutcome, SubmitOutcome};
