//! # Application State Types
//!
//! Everything the auth form holds between frames: the active mode, the fields of that
//! mode, per-field errors, the in-flight flags and the password visibility toggles.
//!
//! The login and register forms are structurally different, so [`FormFields`] is a
//! tagged union rather than one struct with sometimes-irrelevant fields. The mode is
//! derived from the variant and cannot disagree with it.

use std::collections::BTreeMap;

use crate::core::service::AuthUser;

/// Which form is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Login,
    Register,
}

impl Mode {
    pub fn toggled(self) -> Self {
        match self {
            Mode::Login => Mode::Register,
            Mode::Register => Mode::Login,
        }
    }

    /// Heading shown above the form
    pub fn heading(self) -> &'static str {
        match self {
            Mode::Login => "Welcome back",
            Mode::Register => "Join us today",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Mode::Login => "Sign in to your account to continue",
            Mode::Register => "Create your account and start your journey",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            Mode::Login => "Sign In",
            Mode::Register => "Create Account",
        }
    }

    /// Prompt and link text of the mode switch
    pub fn toggle_prompt(self) -> (&'static str, &'static str) {
        match self {
            Mode::Login => ("Don't have an account?", "Sign up"),
            Mode::Register => ("Already have an account?", "Sign in"),
        }
    }
}

/// Form inputs, ordered as they appear on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Stable key used in logs.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Full Name",
            Field::Email => "Email Address",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Enter your full name",
            Field::Email => "Enter your email",
            Field::Password => "Enter your password",
            Field::ConfirmPassword => "Confirm your password",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterFields {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Inputs of whichever form is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormFields {
    Login(LoginFields),
    Register(RegisterFields),
}

impl Default for FormFields {
    fn default() -> Self {
        FormFields::empty(Mode::Login)
    }
}

impl FormFields {
    pub fn empty(mode: Mode) -> Self {
        match mode {
            Mode::Login => FormFields::Login(LoginFields::default()),
            Mode::Register => FormFields::Register(RegisterFields::default()),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            FormFields::Login(_) => Mode::Login,
            FormFields::Register(_) => Mode::Register,
        }
    }

    /// Inputs shown for this form, in display order.
    pub fn active_fields(&self) -> &'static [Field] {
        match self {
            FormFields::Login(_) => &[Field::Email, Field::Password],
            FormFields::Register(_) => {
                &[Field::Name, Field::Email, Field::Password, Field::ConfirmPassword]
            }
        }
    }

    pub fn email(&self) -> &str {
        match self {
            FormFields::Login(fields) => fields.email.as_str(),
            FormFields::Register(fields) => fields.email.as_str(),
        }
    }

    pub fn password(&self) -> &str {
        match self {
            FormFields::Login(fields) => fields.password.as_str(),
            FormFields::Register(fields) => fields.password.as_str(),
        }
    }

    /// Current value of `field`, or `None` if this form has no such input.
    pub fn get(&self, field: Field) -> Option<&str> {
        match (self, field) {
            (FormFields::Login(f), Field::Email) => Some(f.email.as_str()),
            (FormFields::Login(f), Field::Password) => Some(f.password.as_str()),
            (FormFields::Login(_), Field::Name | Field::ConfirmPassword) => None,
            (FormFields::Register(f), Field::Name) => Some(f.name.as_str()),
            (FormFields::Register(f), Field::Email) => Some(f.email.as_str()),
            (FormFields::Register(f), Field::Password) => Some(f.password.as_str()),
            (FormFields::Register(f), Field::ConfirmPassword) => Some(f.confirm_password.as_str()),
        }
    }

    /// Overwrite `field`. Returns false, leaving the form untouched, when this form has
    /// no such input.
    pub fn set(&mut self, field: Field, value: String) -> bool {
        let slot = match (self, field) {
            (FormFields::Login(f), Field::Email) => &mut f.email,
            (FormFields::Login(f), Field::Password) => &mut f.password,
            (FormFields::Login(_), Field::Name | Field::ConfirmPassword) => return false,
            (FormFields::Register(f), Field::Name) => &mut f.name,
            (FormFields::Register(f), Field::Email) => &mut f.email,
            (FormFields::Register(f), Field::Password) => &mut f.password,
            (FormFields::Register(f), Field::ConfirmPassword) => &mut f.confirm_password,
        };
        *slot = value;
        true
    }
}

/// Field → message for every currently invalid input. Absent key means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, &'static str>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    /// Drop the error for `field`; true if there was one.
    pub fn clear(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }
}

impl FromIterator<(Field, &'static str)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (Field, &'static str)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Whether each secret input currently shows its plain text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordVisibility {
    pub password: bool,
    pub confirm_password: bool,
}

impl PasswordVisibility {
    pub fn is_visible(&self, field: Field) -> bool {
        match field {
            Field::Password => self.password,
            Field::ConfirmPassword => self.confirm_password,
            Field::Name | Field::Email => true,
        }
    }
}

/// Complete auth form state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub fields: FormFields,
    pub errors: FieldErrors,
    /// A sign-in or sign-up call is in flight.
    pub submitting: bool,
    /// A password reset call is in flight.
    pub reset_in_flight: bool,
    pub visibility: PasswordVisibility,
    /// Account of the last successful submit in this session.
    pub current_user: Option<AuthUser>,
}

impl AppState {
    pub fn new(mode: Mode) -> Self {
        Self {
            fields: FormFields::empty(mode),
            ..Self::default()
        }
    }

    pub fn mode(&self) -> Mode {
        self.fields.mode()
    }

    /// The mode switch is locked while a submission is in flight.
    pub fn can_toggle_mode(&self) -> bool {
        !self.submitting
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting
    }

    pub fn can_request_reset(&self) -> bool {
        self.mode() == Mode::Login && !self.reset_in_flight
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Please wait..."
        } else {
            self.mode().submit_label()
        }
    }
}
