//! # Shared Utility Functions
//!
//! ## Email Redaction
//!
//! - [`mask_email`] - Keep the first character of the local part and the whole domain
//!
//! Used wherever an address ends up in a log line.
//!
//! ```rust
//! use shared::utils::mask_email;
//!
//! assert_eq!(mask_email("ann@example.com"), "a***@example.com");
//! ```

/// Redact the local part of an email address, keeping its first character.
///
/// Values without an `@` are fully masked. An empty local part yields `***@domain`.
///
/// # Examples
///
/// ```rust
/// use shared::utils::mask_email;
///
/// assert_eq!(mask_email("alice@corp.io"), "a***@corp.io");
/// assert_eq!(mask_email("@corp.io"), "***@corp.io");
/// assert_eq!(mask_email("not-an-email"), "***");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.rsplit_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) => format!("{first}***@{domain}"),
            None => format!("***@{domain}"),
        },
        None => "***".to_string(),
    }
}
