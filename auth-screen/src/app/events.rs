//! # Application Events
//!
//! Results of gateway calls, sent from their Tokio task back to the UI thread.

use uuid::Uuid;

use crate::app::state::Mode;
use crate::core::error::GatewayError;
use crate::core::service::AuthUser;

/// Async task results sent to the UI thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Sign-in or sign-up settled. `mode` is the mode at submit time.
    SubmitSettled {
        submission_id: Uuid,
        mode: Mode,
        result: Result<AuthUser, GatewayError>,
    },
    /// Password reset request settled
    ResetSettled(Result<(), GatewayError>),
}

impl AppEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            AppEvent::SubmitSettled { .. } => "SubmitSettled",
            AppEvent::ResetSettled(_) => "ResetSettled",
        }
    }
}
