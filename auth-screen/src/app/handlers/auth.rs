//! # Authentication Handlers
//!
//! Handlers for field edits, submit, forgot-password, mode switch and password visibility.
//!
//! Each handler takes the state lock once, decides, and releases it before any gateway
//! call is spawned. Gateway calls run as Tokio tasks and report back through
//! [`AppEvent`]; they never touch the state directly.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use async_channel::Sender;
use futures::FutureExt;
use parking_lot::RwLock;
use tracing::Instrument;
use uuid::Uuid;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Field, FieldErrors, FormFields, Mode, PasswordVisibility};
use crate::core::error::GatewayError;
use crate::core::service::AuthGateway;
use crate::utils::validation::validate_form;

/// What a submit click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; errors were published and nothing was sent.
    Invalid,
    /// A submission is already in flight; the click was ignored.
    AlreadySubmitting,
    /// A gateway call was spawned.
    Started(Uuid),
}

/// What a forgot-password click did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The email field is empty; nothing was sent.
    MissingEmail,
    /// The register form has no forgot-password control.
    Unavailable,
    /// A reset request is already in flight; the click was ignored.
    AlreadyInFlight,
    /// A gateway call was spawned.
    Started,
}

/// Store an edited value and drop that field's error.
///
/// Edits are accepted while a submission is in flight.
pub(crate) fn handle_field_change(
    state: &Arc<RwLock<AppState>>,
    field: Field,
    value: String,
) -> bool {
    let mut state = state.write();
    if !state.fields.set(field, value) {
        tracing::warn!(
            field = field.key(),
            mode = ?state.mode(),
            "Ignoring edit of an inactive field"
        );
        return false;
    }
    state.errors.clear(field);
    true
}

/// Validate and, if valid, start the gateway call for the active mode.
pub(crate) fn handle_submit(
    state: &Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    gateway: Arc<dyn AuthGateway>,
) -> SubmitOutcome {
    let request = {
        let mut state = state.write();
        if state.submitting {
            tracing::debug!("Submit ignored while a submission is in flight");
            return SubmitOutcome::AlreadySubmitting;
        }

        let errors = validate_form(&state.fields);
        if !errors.is_empty() {
            tracing::info!(
                invalid_fields = ?errors.iter().map(|(field, _)| field.key()).collect::<Vec<_>>(),
                mode = ?state.mode(),
                "Form failed validation"
            );
            state.errors = errors;
            return SubmitOutcome::Invalid;
        }

        state.errors = FieldErrors::new();
        state.submitting = true;
        state.fields.clone()
    };

    let submission_id = Uuid::new_v4();
    let mode = request.mode();
    let span = tracing::info_span!(
        "submission",
        %submission_id,
        ?mode,
        email = %shared::mask_email(request.email())
    );

    tokio::spawn(
        async move {
            tracing::info!("Submitting credentials");
            let start = std::time::Instant::now();

            let result = settle(async {
                match &request {
                    FormFields::Login(fields) => {
                        gateway.authenticate(&fields.email, &fields.password).await
                    }
                    FormFields::Register(fields) => {
                        gateway
                            .create_account(&fields.email, &fields.password, &fields.name)
                            .await
                    }
                }
            })
            .await;

            let duration_ms = start.elapsed().as_millis();
            match &result {
                Ok(user) => tracing::info!(uid = %user.uid, duration_ms, "Submission succeeded"),
                Err(err @ GatewayError::Unexpected(_)) => {
                    tracing::error!(error = %err, duration_ms, "Submission failed unexpectedly");
                }
                Err(err) => tracing::warn!(error = %err, duration_ms, "Submission rejected"),
            }

            let event = AppEvent::SubmitSettled {
                submission_id,
                mode,
                result,
            };
            if event_tx.send(event).await.is_err() {
                tracing::warn!("Event receiver dropped before the submission settled");
            }
        }
        .instrument(span),
    );

    SubmitOutcome::Started(submission_id)
}

/// Ask the gateway for a reset email to the current address.
pub(crate) fn handle_forgot_password(
    state: &Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    gateway: Arc<dyn AuthGateway>,
) -> ResetOutcome {
    let email = {
        let mut state = state.write();
        if state.mode() != Mode::Login {
            return ResetOutcome::Unavailable;
        }
        if state.reset_in_flight {
            return ResetOutcome::AlreadyInFlight;
        }

        let email = state.fields.email().to_string();
        if email.is_empty() {
            return ResetOutcome::MissingEmail;
        }

        state.reset_in_flight = true;
        email
    };

    let span = tracing::info_span!("password_reset", email = %shared::mask_email(&email));

    tokio::spawn(
        async move {
            let result = settle(gateway.request_password_reset(&email)).await;

            match &result {
                Ok(()) => tracing::info!("Password reset email requested"),
                Err(err) => tracing::warn!(error = %err, "Password reset request failed"),
            }

            if event_tx.send(AppEvent::ResetSettled(result)).await.is_err() {
                tracing::warn!("Event receiver dropped before the reset request settled");
            }
        }
        .instrument(span),
    );

    ResetOutcome::Started
}

/// Switch between login and register, clearing inputs, errors and visibility.
///
/// Refused while a submission is in flight so a late result cannot land on the
/// other form.
pub(crate) fn handle_toggle_mode(state: &Arc<RwLock<AppState>>) -> bool {
    let mut state = state.write();
    if !state.can_toggle_mode() {
        tracing::debug!("Mode switch ignored while a submission is in flight");
        return false;
    }

    let next = state.mode().toggled();
    state.fields = FormFields::empty(next);
    state.errors = FieldErrors::new();
    state.visibility = PasswordVisibility::default();
    tracing::debug!(mode = ?next, "Switched form mode");
    true
}

/// Flip plain-text display of a secret field.
pub(crate) fn handle_toggle_visibility(state: &Arc<RwLock<AppState>>, field: Field) -> bool {
    let mut state = state.write();
    if state.submitting {
        return false;
    }

    let mode = state.mode();
    let visibility = &mut state.visibility;
    match (field, mode) {
        (Field::Password, _) => visibility.password = !visibility.password,
        (Field::ConfirmPassword, Mode::Register) => {
            visibility.confirm_password = !visibility.confirm_password
        }
        _ => return false,
    }
    true
}

/// Await a gateway future, turning a panic inside it into `Unexpected`.
async fn settle<T, F>(call: F) -> Result<T, GatewayError>
where
    F: Future<Output = Result<T, GatewayError>>,
{
    match AssertUnwindSafe(call).catch_unwind().await {
        Ok(result) => result,
        Err(payload) => Err(GatewayError::Unexpected(panic_message(payload.as_ref()))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("gateway panicked: {message}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("gateway panicked: {message}")
    } else {
        "gateway panicked".to_string()
    }
}
