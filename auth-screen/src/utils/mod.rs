//! # Utility Functions
//!
//! Shared utility functions used across the auth screen.
//!
//! ## Modules
//!
//! - **[`validation`]**: Field rules of the login and register forms
//! - **[`runtime`]**: Process-wide Tokio runtime for gateway calls
//!
//! ## Related Modules
//!
//! - [`lib_utils::validation`]: The underlying check primitives
//! - [`crate::core`]: Core abstractions and error types

pub mod runtime;
pub mod validation;
