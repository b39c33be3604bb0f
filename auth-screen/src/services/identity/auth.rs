//! # Authentication Endpoints
//!
//! Sign-up (with display name), password sign-in and password reset emails.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    mask_email, ErrorResponse, OobCodeRequest, OobCodeResponse, PasswordSignInRequest,
    SignInResponse, SignUpRequest, UpdateProfileRequest, UpdateProfileResponse,
};

use super::client::IdentityClient;
use super::errors::provider_message;
use crate::core::error::GatewayError;
use crate::core::service::AuthUser;

/// Token lifetime assumed when the provider omits or garbles `expiresIn`.
pub const DEFAULT_TOKEN_LIFETIME_SECS: i64 = 3600;

/// Create an account, then set its display name.
///
/// The account exists once `signUp` succeeds; a failing profile update is still
/// reported as a failure so the caller never greets a nameless user as registered.
#[tracing::instrument(skip(client, email, password, name), fields(email = %mask_email(email)))]
pub async fn sign_up(
    client: &IdentityClient,
    email: &str,
    password: &str,
    name: &str,
) -> Result<AuthUser, GatewayError> {
    tracing::info!("Creating account");
    let start = std::time::Instant::now();

    let created: SignInResponse =
        post_json(client, "signUp", &SignUpRequest::new(email, password)).await?;
    tracing::debug!(uid = %created.local_id, "Account created, setting display name");

    let update = UpdateProfileRequest {
        id_token: created.id_token.clone(),
        display_name: name.to_string(),
        return_secure_token: true,
    };
    let updated: UpdateProfileResponse = post_json(client, "update", &update).await.map_err(|e| {
        tracing::error!(uid = %created.local_id, error = %e, "Profile update failed after sign-up");
        e
    })?;

    let expires_in = updated.expires_in.as_deref().unwrap_or(&created.expires_in);
    let user = AuthUser {
        uid: created.local_id.clone(),
        email: updated.email.unwrap_or(created.email),
        display_name: updated.display_name.or_else(|| Some(name.to_string())),
        expires_at: expires_at(expires_in),
        id_token: updated.id_token.unwrap_or(created.id_token),
        refresh_token: updated.refresh_token.unwrap_or(created.refresh_token),
    };

    tracing::info!(
        duration_ms = start.elapsed().as_millis(),
        expires_at = %lib_utils::format_time(user.expires_at),
        "Sign-up successful"
    );
    Ok(user)
}

/// Sign in with email and password.
#[tracing::instrument(skip(client, email, password), fields(email = %mask_email(email)))]
pub async fn sign_in(
    client: &IdentityClient,
    email: &str,
    password: &str,
) -> Result<AuthUser, GatewayError> {
    tracing::info!("Attempting sign-in");
    let start = std::time::Instant::now();

    let request = PasswordSignInRequest::new(email, password);
    let response: SignInResponse = post_json(client, "signInWithPassword", &request).await?;

    let user = user_from_sign_in(response);
    tracing::info!(
        duration_ms = start.elapsed().as_millis(),
        expires_at = %lib_utils::format_time(user.expires_at),
        "Sign-in successful"
    );
    Ok(user)
}

/// Ask the provider to email a password reset link.
#[tracing::instrument(skip(client, email), fields(email = %mask_email(email)))]
pub async fn send_password_reset(client: &IdentityClient, email: &str) -> Result<(), GatewayError> {
    let request = OobCodeRequest::password_reset(email);
    let _: OobCodeResponse = post_json(client, "sendOobCode", &request).await?;
    tracing::info!("Password reset email sent");
    Ok(())
}

fn user_from_sign_in(response: SignInResponse) -> AuthUser {
    AuthUser {
        expires_at: expires_at(&response.expires_in),
        uid: response.local_id,
        email: response.email,
        display_name: response.display_name.filter(|name| !name.is_empty()),
        id_token: response.id_token,
        refresh_token: response.refresh_token,
    }
}

/// Absolute expiry from the provider's `expiresIn` seconds string.
fn expires_at(expires_in: &str) -> DateTime<Utc> {
    let seconds = expires_in.trim().parse::<i64>().unwrap_or_else(|_| {
        tracing::warn!(
            expires_in,
            "Unreadable token lifetime, assuming {DEFAULT_TOKEN_LIFETIME_SECS}s"
        );
        DEFAULT_TOKEN_LIFETIME_SECS
    });
    lib_utils::seconds_from(lib_utils::now_utc(), seconds)
}

/// POST `body` to `accounts:{action}` and decode the success or error envelope.
async fn post_json<Req, Resp>(
    client: &IdentityClient,
    action: &str,
    body: &Req,
) -> Result<Resp, GatewayError>
where
    Req: Serialize + ?Sized,
    Resp: DeserializeOwned,
{
    let response = client
        .http
        .post(client.config.endpoint(action))
        .query(&[("key", client.config.api_key.as_str())])
        .json(body)
        .send()
        .await
        .map_err(|e| {
            // The URL carries the API key.
            let e = e.without_url();
            tracing::error!(action, error = %e, "Identity request failed");
            GatewayError::Unexpected(format!("network error: {e}"))
        })?;

    let status = response.status();

    if status.is_success() {
        return response.json::<Resp>().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!(action, error = %e, "Identity response parse error");
            GatewayError::Unexpected(format!("failed to parse {action} response: {e}"))
        });
    }

    let text = response.text().await.map_err(|e| {
        let e = e.without_url();
        GatewayError::Unexpected(format!("failed to read {action} error body: {e}"))
    })?;

    match serde_json::from_str::<ErrorResponse>(&text) {
        Ok(envelope) => {
            tracing::warn!(
                action,
                status = status.as_u16(),
                code = envelope.error.reason_code(),
                "Identity provider rejected request"
            );
            Err(GatewayError::Rejected(provider_message(&envelope.error)))
        }
        Err(_) => {
            tracing::error!(
                action,
                status = status.as_u16(),
                "Identity provider returned an unreadable error"
            );
            Err(GatewayError::Unexpected(format!("{action} failed with status {status}")))
        }
    }
}
