//! Validation rules for the auth form.
//!
//! Every applicable rule runs; the result holds at most one message per field. The
//! checks are pure, run on the raw input without trimming, and never touch the network.

use lib_utils::validation::{
    validate_email_shape, validate_equals, validate_min_utf16_len, validate_not_empty,
};

use crate::app::state::{Field, FieldErrors, FormFields};

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Email is invalid";
pub const PASSWORD_REQUIRED: &str = "Password is required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters";
pub const NAME_REQUIRED: &str = "Name is required";
pub const CONFIRM_REQUIRED: &str = "Please confirm your password";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match";

/// Minimum password length in UTF-16 code units.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Validate email: required, then shape
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    validate_not_empty(email, EMAIL_REQUIRED)?;
    validate_email_shape(email, EMAIL_INVALID)
}

/// Validate password: required, then minimum length
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    validate_not_empty(password, PASSWORD_REQUIRED)?;
    validate_min_utf16_len(password, MIN_PASSWORD_LEN, PASSWORD_TOO_SHORT)
}

pub fn validate_name(name: &str) -> Result<(), &'static str> {
    validate_not_empty(name, NAME_REQUIRED)
}

/// Validate confirmation: required, then exact match
pub fn validate_confirmation(password: &str, confirm_password: &str) -> Result<(), &'static str> {
    validate_not_empty(confirm_password, CONFIRM_REQUIRED)?;
    validate_equals(confirm_password, password, PASSWORDS_DIFFER)
}

/// Run every rule that applies to the active form.
pub fn validate_form(fields: &FormFields) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let mut check = |field: Field, outcome: Result<(), &'static str>| {
        if let Err(message) = outcome {
            errors.insert(field, message);
        }
    };

    check(Field::Email, validate_email(fields.email()));
    check(Field::Password, validate_password(fields.password()));

    if let FormFields::Register(register) = fields {
        check(Field::Name, validate_name(&register.name));
        check(
            Field::ConfirmPassword,
            validate_confirmation(&register.password, &register.confirm_password),
        );
    }

    errors
}
