use serde::{Deserialize, Serialize};

/// Account creation request (`accounts:signUp`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub return_secure_token: bool,
}

impl SignUpRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            return_secure_token: true,
        }
    }
}

/// Password sign-in request (`accounts:signInWithPassword`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PasswordSignInRequest {
    pub email: String,
    pub password: String,
    pub return_secure_token: bool,
}

impl PasswordSignInRequest {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            return_secure_token: true,
        }
    }
}

/// Token-bearing response shared by sign-up and sign-in.
///
/// `expires_in` is a decimal string of seconds, as the provider sends it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    pub local_id: String,
    pub email: String,
    pub id_token: String,
    pub refresh_token: String,
    pub expires_in: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered: Option<bool>,
}

/// Profile update request (`accounts:update`), used to set the display name after sign-up
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub id_token: String,
    pub display_name: String,
    pub return_secure_token: bool,
}

/// Profile update response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileResponse {
    pub local_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<String>,
}

/// Out-of-band code kinds understood by `accounts:sendOobCode`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OobRequestType {
    PasswordReset,
}

/// Out-of-band code request (`accounts:sendOobCode`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OobCodeRequest {
    pub request_type: OobRequestType,
    pub email: String,
}

impl OobCodeRequest {
    pub fn password_reset(email: impl Into<String>) -> Self {
        Self {
            request_type: OobRequestType::PasswordReset,
            email: email.into(),
        }
    }
}

/// Out-of-band code response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OobCodeResponse {
    #[serde(default)]
    pub email: String,
}

/// Error envelope returned by every provider endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: ProviderError,
}

/// Provider error body.
///
/// `message` is either a bare code (`EMAIL_EXISTS`) or a code followed by
/// ` : ` and a human explanation (`WEAK_PASSWORD : Password should be at least 6 characters`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderError {
    pub code: u16,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ProviderErrorDetail>,
}

impl ProviderError {
    /// The machine-readable code part of `message`.
    pub fn reason_code(&self) -> &str {
        match self.message.split_once(" : ") {
            Some((code, _)) => code.trim(),
            None => self.message.trim(),
        }
    }

    /// The human explanation after the code, if the provider sent one.
    pub fn detail(&self) -> Option<&str> {
        self.message
            .split_once(" : ")
            .map(|(_, detail)| detail.trim())
            .filter(|detail| !detail.is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderErrorDetail {
    pub message: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub reason: String,
}
