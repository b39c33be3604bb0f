//! # Auth Window
//!
//! eframe application hosting the auth form.

use std::time::Duration;

use crate::app::App;
use crate::ui::screens::auth::{self, FormAction};
use crate::ui::theme::Theme;
use crate::ui::widgets::NotificationManager;

/// Repaint interval while a gateway call is outstanding.
const BUSY_REPAINT: Duration = Duration::from_millis(100);

pub struct AuthWindow {
    app: App<NotificationManager>,
    theme: Theme,
    theme_applied: bool,
}

impl AuthWindow {
    pub fn new(app: App<NotificationManager>) -> Self {
        Self {
            app,
            theme: Theme::default(),
            theme_applied: false,
        }
    }

    fn apply(&mut self, action: FormAction) {
        tracing::trace!(action = ?redacted(&action), "Form action");
        match action {
            FormAction::Edit(field, value) => {
                self.app.handle_field_change(field, value);
            }
            FormAction::ToggleVisibility(field) => {
                self.app.handle_toggle_visibility(field);
            }
            FormAction::Submit => {
                self.app.handle_submit();
            }
            FormAction::ForgotPassword => {
                self.app.handle_forgot_password();
            }
            FormAction::ToggleMode => {
                self.app.handle_toggle_mode();
            }
        }
    }
}

// Field values never reach the log.
fn redacted(action: &FormAction) -> FormAction {
    match action {
        FormAction::Edit(field, _) => FormAction::Edit(*field, String::new()),
        other => other.clone(),
    }
}

impl eframe::App for AuthWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            self.theme.apply(ctx);
            self.theme_applied = true;
        }

        if self.app.on_tick() > 0 {
            ctx.request_repaint();
        }

        // Render from a snapshot so no lock is held while egui lays out.
        let snapshot = self.app.state.read().clone();
        let actions = egui::CentralPanel::default()
            .show(ctx, |ui| auth::render(ui, &snapshot, &self.theme))
            .inner;

        for action in actions {
            self.apply(action);
        }

        self.app.notifier_mut().show(ctx);

        if self.app.is_busy() {
            ctx.request_repaint_after(BUSY_REPAINT);
        }
    }
}
