//! # Validation Utilities
//!
//! Input validation primitives. Each check returns the caller-supplied message on failure
//! so that the calling form owns its copy. Nothing here trims or normalizes input.

use once_cell::sync::Lazy;
use regex::Regex;

/// `<nonspace>@<nonspace>.<nonspace>` anywhere in the value.
static EMAIL_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email shape pattern is valid"));

/// Validate that a string is not empty. Whitespace counts as content.
pub fn validate_not_empty(value: &str, message: &'static str) -> Result<(), &'static str> {
    if value.is_empty() {
        Err(message)
    } else {
        Ok(())
    }
}

/// Permissive email shape check; not an RFC 5322 validator.
pub fn validate_email_shape(email: &str, message: &'static str) -> Result<(), &'static str> {
    if EMAIL_SHAPE.is_match(email) {
        Ok(())
    } else {
        Err(message)
    }
}

/// Validate minimum length, counted in UTF-16 code units rather than bytes or chars.
///
/// A character outside the Basic Multilingual Plane counts as two units.
pub fn validate_min_utf16_len(
    value: &str,
    min: usize,
    message: &'static str,
) -> Result<(), &'static str> {
    if value.encode_utf16().count() < min {
        Err(message)
    } else {
        Ok(())
    }
}

/// Validate exact equality of two inputs.
pub fn validate_equals(
    value: &str,
    expected: &str,
    message: &'static str,
) -> Result<(), &'static str> {
    if value == expected {
        Ok(())
    } else {
        Err(message)
    }
}
