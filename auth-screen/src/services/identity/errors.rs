//! Provider error codes to user-facing messages.

use shared::ProviderError;

/// Readable message for a provider error body.
///
/// Unknown codes fall back to the provider's own explanation, then to the bare code.
pub fn provider_message(error: &ProviderError) -> String {
    let message = match error.reason_code() {
        "EMAIL_EXISTS" => "An account with this email already exists",
        "INVALID_LOGIN_CREDENTIALS" | "INVALID_PASSWORD" => "Invalid email or password",
        "EMAIL_NOT_FOUND" => "No account found with this email",
        "USER_DISABLED" => "This account has been disabled",
        "TOO_MANY_ATTEMPTS_TRY_LATER" => "Too many attempts. Please try again later",
        "WEAK_PASSWORD" => error.detail().unwrap_or("Password is too weak"),
        "INVALID_EMAIL" | "MISSING_EMAIL" => "Email is invalid",
        "OPERATION_NOT_ALLOWED" => "Email and password sign-in is disabled for this project",
        "INVALID_ID_TOKEN" | "TOKEN_EXPIRED" | "USER_NOT_FOUND" => {
            "Your session has expired. Please sign in again"
        }
        code => error.detail().unwrap_or(code),
    };
    message.to_string()
}
