//! # Authentication Screen
//!
//! Login and registration form. Rendering is read-only; every user action comes back as
//! a [`FormAction`] for the window to apply.

use egui;

use crate::app::{AppState, Field, Mode};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;

/// A user action taken during one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Edit(Field, String),
    ToggleVisibility(Field),
    Submit,
    ForgotPassword,
    ToggleMode,
}

/// Render the auth form and collect this frame's actions.
pub fn render(ui: &mut egui::Ui, state: &AppState, theme: &Theme) -> Vec<FormAction> {
    let mut actions = Vec::new();
    let mode = state.mode();

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        forms::render_form_heading(ui, mode.heading(), mode.subtitle(), theme);

        if let Some(user) = &state.current_user {
            ui.label(
                egui::RichText::new(format!("Signed in as {}", user.greeting_name()))
                    .size(14.0)
                    .color(theme.success),
            );
            ui.add_space(12.0);
        }

        let fields = state.fields.active_fields();
        for (index, field) in fields.iter().copied().enumerate() {
            render_field(ui, state, field, theme, &mut actions);

            let is_last = index + 1 == fields.len();
            if field == Field::Password && mode == Mode::Login {
                ui.horizontal(|ui| {
                    let offset = ui.available_width() / 2.0 + forms::INPUT_SIZE[0] / 2.0 - 110.0;
                    ui.add_space(offset.max(0.0));
                    let label = if state.reset_in_flight {
                        "Sending..."
                    } else {
                        "Forgot password?"
                    };
                    if forms::render_link(ui, label, state.can_request_reset(), theme).clicked() {
                        actions.push(FormAction::ForgotPassword);
                    }
                });
            }
            if is_last && ui.input(|i| i.key_pressed(egui::Key::Enter)) && state.can_submit() {
                actions.push(FormAction::Submit);
            }
            ui.add_space(10.0);
        }

        ui.add_space(10.0);
        if forms::render_button(ui, state.submit_label(), state.can_submit(), theme).clicked() {
            actions.push(FormAction::Submit);
        }

        ui.add_space(16.0);
        let (prompt, link) = mode.toggle_prompt();
        ui.horizontal(|ui| {
            let width = ui.available_width();
            ui.add_space((width / 2.0 - 130.0).max(0.0));
            forms::render_hint(ui, prompt, theme);
            if forms::render_link(ui, link, state.can_toggle_mode(), theme).clicked() {
                actions.push(FormAction::ToggleMode);
            }
        });
    });

    dedup_submit(&mut actions);
    actions
}

fn render_field(
    ui: &mut egui::Ui,
    state: &AppState,
    field: Field,
    theme: &Theme,
    actions: &mut Vec<FormAction>,
) {
    let value = state.fields.get(field).unwrap_or_default();
    let secret = field.is_secret().then(|| state.visibility.is_visible(field));

    let input = forms::render_text_input(
        ui,
        field.label(),
        value,
        field.placeholder(),
        secret,
        !state.submitting,
        theme,
    );

    if let Some(value) = input.edited {
        actions.push(FormAction::Edit(field, value));
    }
    if input.visibility_clicked {
        actions.push(FormAction::ToggleVisibility(field));
    }
    if let Some(error) = state.errors.get(field) {
        forms::render_error(ui, error, theme);
    }
}

/// Enter and a click in the same frame count as one submit.
fn dedup_submit(actions: &mut Vec<FormAction>) {
    let mut seen = false;
    actions.retain(|action| {
        if *action != FormAction::Submit {
            return true;
        }
        !std::mem::replace(&mut seen, true)
    });
}
