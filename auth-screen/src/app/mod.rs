//! # Application Orchestrator
//!
//! The [`App`] struct coordinates the auth form: user actions come in through the
//! `handle_*` methods, gateway calls run on Tokio, and their results come back as
//! [`AppEvent`]s drained by [`App::on_tick`].
//!
//! ```text
//! ┌──────────────────────── Main Thread (egui) ────────────────────────┐
//! │  App                                                               │
//! │  - handle_*()   validate, flip flags, spawn gateway call           │
//! │  - on_tick()    drain settled calls, notify, clear flags           │
//! │  State: Arc<RwLock<AppState>>                                      │
//! └───────────────────────────────┬────────────────────────────────────┘
//!                                 │ async_channel (unbounded)
//! ┌───────────────────────────────▼────────────────────────────────────┐
//! │  Tokio tasks: AuthGateway::{authenticate, create_account,          │
//! │               request_password_reset}                              │
//! └────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Locks are held only for the duration of a decision, never across an await.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! let mut app = App::new(gateway, NotificationManager::default());
//!
//! // In the egui update loop:
//! app.on_tick();
//! if submit_clicked {
//!     app.handle_submit();
//! }
//! ```

pub mod event_handler;
pub mod events;
pub mod handlers;
pub mod state;

pub use events::AppEvent;
pub use handlers::{ResetOutcome, SubmitOutcome};
pub use state::*;

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::core::service::{AuthGateway, NotificationSink};
use event_handler::AppEventHandler;

/// Auth form controller.
///
/// Generic over the notification sink so tests can record what the user would see.
pub struct App<N: NotificationSink> {
    /// Shared form state. Hold locks briefly; the UI reads it every frame.
    pub state: Arc<RwLock<AppState>>,
    gateway: Arc<dyn AuthGateway>,
    notifier: N,
    /// Cloned into each spawned gateway call.
    event_tx: Sender<AppEvent>,
    /// Polled in `on_tick()` with `try_recv()`.
    event_rx: Receiver<AppEvent>,
}

impl<N: NotificationSink> App<N> {
    /// A login form with empty fields.
    pub fn new(gateway: Arc<dyn AuthGateway>, notifier: N) -> Self {
        Self::with_mode(gateway, notifier, Mode::Login)
    }

    pub fn with_mode(gateway: Arc<dyn AuthGateway>, notifier: N, mode: Mode) -> Self {
        let (event_tx, event_rx) = unbounded();
        tracing::info!(?mode, "Auth form initialized");

        Self {
            state: Arc::new(RwLock::new(AppState::new(mode))),
            gateway,
            notifier,
            event_tx,
            event_rx,
        }
    }

    /// Called every frame: applies every gateway result that has arrived.
    ///
    /// Returns the number of events processed.
    pub fn on_tick(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event_impl(event);
            processed += 1;
        }
        processed
    }

    /// Wait for the next gateway result and apply it.
    ///
    /// Returns false if no sender is left, which cannot happen while `self` is alive.
    pub async fn settle_next(&mut self) -> bool {
        match self.event_rx.recv().await {
            Ok(event) => {
                self.handle_event_impl(event);
                true
            }
            Err(_) => false,
        }
    }

    /// Either flag means a gateway call is outstanding.
    pub fn is_busy(&self) -> bool {
        let state = self.state.read();
        state.submitting || state.reset_in_flight
    }

    pub fn handle_field_change(&mut self, field: Field, value: String) -> bool {
        handlers::auth::handle_field_change(&self.state, field, value)
    }

    pub fn handle_submit(&mut self) -> SubmitOutcome {
        handlers::auth::handle_submit(&self.state, self.event_tx.clone(), self.gateway.clone())
    }

    pub fn handle_forgot_password(&mut self) -> ResetOutcome {
        let outcome = handlers::auth::handle_forgot_password(
            &self.state,
            self.event_tx.clone(),
            self.gateway.clone(),
        );
        if outcome == ResetOutcome::MissingEmail {
            self.notifier.notify(event_handler::missing_email_notification());
        }
        outcome
    }

    pub fn handle_toggle_mode(&mut self) -> bool {
        handlers::auth::handle_toggle_mode(&self.state)
    }

    pub fn handle_toggle_visibility(&mut self, field: Field) -> bool {
        handlers::auth::handle_toggle_visibility(&self.state, field)
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;
    use crate::app::event_handler::GENERIC_FAILURE;
    use crate::core::error::GatewayError;
    use crate::core::service::{AuthUser, Notification};

    #[derive(Clone, Copy)]
    enum Script {
        Succeed,
        Reject(&'static str),
        Fail,
        Panic,
    }

    struct ScriptedGateway {
        script: Script,
        sign_ins: AtomicUsize,
        sign_ups: AtomicUsize,
        resets: AtomicUsize,
    }

    impl ScriptedGateway {
        fn new(script: Script) -> Arc<Self> {
            Arc::new(Self {
                script,
                sign_ins: AtomicUsize::new(0),
                sign_ups: AtomicUsize::new(0),
                resets: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.sign_ins.load(Ordering::SeqCst)
                + self.sign_ups.load(Ordering::SeqCst)
                + self.resets.load(Ordering::SeqCst)
        }

        fn play<T>(&self, value: T) -> Result<T, GatewayError> {
            match self.script {
                Script::Succeed => Ok(value),
                Script::Reject(message) => Err(GatewayError::Rejected(message.to_string())),
                Script::Fail => Err(GatewayError::Unexpected("connection refused".to_string())),
                Script::Panic => panic!("scripted gateway panic"),
            }
        }
    }

    fn user(email: &str, name: Option<&str>) -> AuthUser {
        AuthUser {
            uid: "uid-1".to_string(),
            email: email.to_string(),
            display_name: name.map(str::to_string),
            id_token: "id-token".to_string(),
            refresh_token: "refresh-token".to_string(),
            expires_at: Utc::now(),
        }
    }

    #[async_trait]
    impl AuthGateway for ScriptedGateway {
        async fn create_account(
            &self,
            email: &str,
            _password: &str,
            name: &str,
        ) -> Result<AuthUser, GatewayError> {
            self.sign_ups.fetch_add(1, Ordering::SeqCst);
            self.play(user(email, Some(name)))
        }

        async fn authenticate(
            &self,
            email: &str,
            _password: &str,
        ) -> Result<AuthUser, GatewayError> {
            self.sign_ins.fetch_add(1, Ordering::SeqCst);
            self.play(user(email, None))
        }

        async fn request_password_reset(&self, _email: &str) -> Result<(), GatewayError> {
            self.resets.fetch_add(1, Ordering::SeqCst);
            self.play(())
        }
    }

    fn app(gateway: &Arc<ScriptedGateway>, mode: Mode) -> App<Vec<Notification>> {
        App::with_mode(gateway.clone(), Vec::new(), mode)
    }

    fn fill(app: &mut App<Vec<Notification>>, values: &[(Field, &str)]) {
        for (field, value) in values {
            assert!(app.handle_field_change(*field, value.to_string()));
        }
    }

    #[tokio::test]
    async fn empty_email_blocks_login_submit() {
        let gateway = ScriptedGateway::new(Script::Succeed);
        let mut app = app(&gateway, Mode::Login);
        fill(&mut app, &[(Field::Password, "secret1")]);

        assert_eq!(app.handle_submit(), SubmitOutcome::Invalid);

        let state = app.state.read();
        assert_eq!(state.errors.len(), 1);
        assert_eq!(state.errors.get(Field::Email), Some("Email is required"));
        assert!(!state.submitting);
        drop(state);
        assert_eq!(gateway.calls(), 0);
        assert!(app.notifier().is_empty());
    }

    #[tokio::test]
    async fn valid_login_notifies_and_clears_loading() {
        let gateway = ScriptedGateway::new(Script::Succeed);
        let mut app = app(&gateway, Mode::Login);
        fill(&mut app, &[(Field::Email, "a@b.com"), (Field::Password, "secret1")]);

        assert!(matches!(app.handle_submit(), SubmitOutcome::Started(_)));
        assert!(app.state.read().submitting);
        assert_eq!(app.state.read().submit_label(), "Please wait...");

        assert!(app.settle_next().await);

        let state = app.state.read();
        assert!(!state.submitting);
        assert_eq!(state.current_user.as_ref().map(|u| u.email.as_str()), Some("a@b.com"));
        drop(state);
        assert_eq!(gateway.sign_ins.load(Ordering::SeqCst), 1);
        assert_eq!(app.notifier().len(), 1);
        assert_eq!(app.notifier()[0].title, "Welcome back!");
        assert!(!app.notifier()[0].is_destructive());
    }

    #[tokio::test]
    async fn mismatched_confirmation_blocks_register_submit() {
        let gateway = ScriptedGateway::new(Script::Succeed);
        let mut app = app(&gateway, Mode::Register);
        fill(
            &mut app,
            &[
                (Field::Name, "Ann"),
                (Field::Email, "a@b.com"),
                (Field::Password, "secret1"),
                (Field::ConfirmPassword, "secret2"),
            ],
        );

        assert_eq!(app.handle_submit(), SubmitOutcome::Invalid);

        let errors = app.state.read().errors.clone();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::ConfirmPassword), Some("Passwords do not match"));
        assert_eq!(gateway.calls(), 0);
    }

    #[tokio::test]
    async fn forgot_password_requires_email() {
        let gateway = ScriptedGateway::new(Script::Succeed);
        let mut app = app(&gateway, Mode::Login);

        assert_eq!(app.handle_forgot_password(), ResetOutcome::MissingEmail);

        assert_eq!(gateway.calls(), 0);
        assert!(!app.is_busy());
        assert_eq!(app.notifier().len(), 1);
        assert_eq!(app.notifier()[0].title, "Email Required");
        assert_eq!(app.notifier()[0].description, "Please enter your email address first.");
        assert!(app.notifier()[0].is_destructive());
    }

    #[tokio::test]
    async fn gateway_failure_shows_generic_error() {
        for script in [Script::Fail, Script::Panic] {
            let gateway = ScriptedGateway::new(script);
            let mut app = app(&gateway, Mode::Login);
            fill(&mut app, &[(Field::Email, "a@b.com"), (Field::Password, "secret1")]);

            assert!(matches!(app.handle_submit(), SubmitOutcome::Started(_)));
            assert!(app.settle_next().await);

            assert!(!app.state.read().submitting);
            assert!(app.state.read().current_user.is_none());
            let notification = &app.notifier()[0];
            assert_eq!(notification.title, "Error");
            assert_eq!(notification.description, GENERIC_FAILURE);
            assert!(notification.is_destructive());
        }
    }

    #[tokio::test]
    async fn rejected_registration_keeps_fields() {
        let gateway =
            ScriptedGateway::new(Script::Reject("An account with this email already exists"));
        let mut app = app(&gateway, Mode::Register);
        fill(
            &mut app,
            &[
                (Field::Name, "Ann"),
                (Field::Email, "a@b.com"),
                (Field::Password, "secret1"),
                (Field::ConfirmPassword, "secret1"),
            ],
        );

        assert!(matches!(app.handle_submit(), SubmitOutcome::Started(_)));
        assert!(app.settle_next().await);

        assert_eq!(gateway.sign_ups.load(Ordering::SeqCst), 1);
        assert_eq!(app.notifier()[0].title, "Registration Failed");
        assert_eq!(app.notifier()[0].description, "An account with this email already exists");
        let state = app.state.read();
        assert!(!state.submitting);
        assert_eq!(state.fields.get(Field::Name), Some("Ann"));
    }

    #[tokio::test]
    async fn second_submit_ignored_while_in_flight() {
        let gateway = ScriptedGateway::new(Script::Succeed);
        let mut app = app(&gateway, Mode::Login);
        fill(&mut app, &[(Field::Email, "a@b.com"), (Field::Password, "secret1")]);

        assert!(matches!(app.handle_submit(), SubmitOutcome::Started(_)));
        assert_eq!(app.handle_submit(), SubmitOutcome::AlreadySubmitting);
        assert!(!app.handle_toggle_mode());
        assert_eq!(app.state.read().mode(), Mode::Login);

        assert!(app.settle_next().await);
        assert_eq!(gateway.sign_ins.load(Ordering::SeqCst), 1);
        assert_eq!(app.notifier().len(), 1);
        assert!(app.handle_toggle_mode());
        assert_eq!(app.state.read().mode(), Mode::Register);
    }

    #[tokio::test]
    async fn forgot_password_round_trip() {
        let gateway = ScriptedGateway::new(Script::Succeed);
        let mut app = app(&gateway, Mode::Login);
        fill(&mut app, &[(Field::Email, "a@b.com")]);

        assert_eq!(app.handle_forgot_password(), ResetOutcome::Started);
        assert!(app.state.read().reset_in_flight);
        assert!(!app.state.read().submitting);
        assert_eq!(app.handle_forgot_password(), ResetOutcome::AlreadyInFlight);

        assert!(app.settle_next().await);
        assert!(!app.is_busy());
        assert_eq!(gateway.resets.load(Ordering::SeqCst), 1);
        assert_eq!(app.notifier()[0].title, "Reset Email Sent");
    }

    #[tokio::test]
    async fn forgot_password_failure_is_reported() {
        let gateway = ScriptedGateway::new(Script::Reject("There is no account with this email"));
        let mut app = app(&gateway, Mode::Login);
        fill(&mut app, &[(Field::Email, "nobody@b.com")]);

        assert_eq!(app.handle_forgot_password(), ResetOutcome::Started);
        assert!(app.settle_next().await);

        assert!(!app.state.read().reset_in_flight);
        assert_eq!(app.notifier()[0].title, "Reset Failed");
        assert_eq!(app.notifier()[0].description, "There is no account with this email");
    }

    #[tokio::test]
    async fn forgot_password_unavailable_in_register_mode() {
        let gateway = ScriptedGateway::new(Script::Succeed);
        let mut app = app(&gateway, Mode::Register);
        fill(&mut app, &[(Field::Email, "a@b.com")]);

        assert_eq!(app.handle_forgot_password(), ResetOutcome::Unavailable);
        assert_eq!(gateway.calls(), 0);
        assert!(app.notifier().is_empty());
    }

    #[tokio::test]
    async fn editing_a_field_clears_its_error() {
        let gateway = ScriptedGateway::new(Script::Succeed);
        let mut app = app(&gateway, Mode::Login);

        assert_eq!(app.handle_submit(), SubmitOutcome::Invalid);
        assert_eq!(app.state.read().errors.len(), 2);

        app.handle_field_change(Field::Email, "a".to_string());
        let state = app.state.read();
        assert_eq!(state.errors.get(Field::Email), None);
        assert_eq!(state.errors.get(Field::Password), Some("Password is required"));
    }

    #[tokio::test]
    async fn on_tick_drains_settled_calls() {
        let gateway = ScriptedGateway::new(Script::Succeed);
        let mut app = app(&gateway, Mode::Login);
        fill(&mut app, &[(Field::Email, "a@b.com"), (Field::Password, "secret1")]);
        app.handle_submit();

        let mut processed = 0;
        for _ in 0..100 {
            processed += app.on_tick();
            if processed > 0 {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }

        assert_eq!(processed, 1);
        assert!(!app.is_busy());
    }
}
