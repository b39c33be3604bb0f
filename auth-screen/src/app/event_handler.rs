//! # Event Handler
//!
//! Applies settled gateway calls to the state and publishes the matching notification.
//!
//! The notification copy lives here as pure functions of the result so it can be
//! checked without a running form.

use crate::app::{App, AppEvent, Mode};
use crate::core::error::GatewayError;
use crate::core::service::{AuthUser, Notification, NotificationSink};

pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl<N: NotificationSink> AppEventHandler for App<N> {
    fn handle_event_impl(&mut self, event: AppEvent) {
        tracing::debug!(event = event.kind(), "Processing event");

        match event {
            AppEvent::SubmitSettled {
                submission_id,
                mode,
                result,
            } => {
                tracing::debug!(%submission_id, "Submission settled");
                self.handle_submit_settled(mode, result);
            }
            AppEvent::ResetSettled(result) => {
                self.handle_reset_settled(result);
            }
        }
    }
}

impl<N: NotificationSink> App<N> {
    fn handle_submit_settled(&mut self, mode: Mode, result: Result<AuthUser, GatewayError>) {
        self.notifier.notify(submit_notification(mode, &result));

        let mut state = self.state.write();
        state.submitting = false;
        if let Ok(user) = result {
            tracing::info!(user = ?user, "Signed in");
            state.current_user = Some(user);
        }
    }

    fn handle_reset_settled(&mut self, result: Result<(), GatewayError>) {
        self.notifier.notify(reset_notification(&result));
        self.state.write().reset_in_flight = false;
    }
}

/// Notification for a settled sign-in or sign-up.
pub fn submit_notification(mode: Mode, result: &Result<AuthUser, GatewayError>) -> Notification {
    match (mode, result) {
        (Mode::Login, Ok(_)) => {
            Notification::success("Welcome back!", "You have successfully logged in.")
        }
        (Mode::Register, Ok(_)) => {
            Notification::success("Account Created!", "Your account has been created successfully.")
        }
        (_, Err(GatewayError::Unexpected(_))) => {
            Notification::destructive("Error", GENERIC_FAILURE)
        }
        (Mode::Login, Err(GatewayError::Rejected(message))) => {
            Notification::destructive("Login Failed", message.clone())
        }
        (Mode::Register, Err(GatewayError::Rejected(message))) => {
            Notification::destructive("Registration Failed", message.clone())
        }
    }
}

/// Notification for a settled password reset request.
pub fn reset_notification(result: &Result<(), GatewayError>) -> Notification {
    match result {
        Ok(()) => Notification::success(
            "Reset Email Sent",
            "Check your email for password reset instructions.",
        ),
        Err(GatewayError::Rejected(message)) => {
            Notification::destructive("Reset Failed", message.clone())
        }
        Err(GatewayError::Unexpected(_)) => Notification::destructive("Error", GENERIC_FAILURE),
    }
}

/// Published when forgot-password is clicked with an empty email.
pub fn missing_email_notification() -> Notification {
    Notification::destructive("Email Required", "Please enter your email address first.")
}
