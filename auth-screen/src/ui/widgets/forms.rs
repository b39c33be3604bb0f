//! # Form Components
//!
//! Reusable form elements for the auth screen

use egui::{self, RichText};

use crate::ui::theme::Theme;

pub const INPUT_SIZE: [f32; 2] = [300.0, 32.0];

/// What happened to a text input this frame.
pub struct InputResponse {
    pub response: egui::Response,
    /// New value if the user edited it.
    pub edited: Option<String>,
    /// The show/hide toggle was clicked.
    pub visibility_clicked: bool,
}

/// Render a labelled single-line input, with a show/hide toggle for secret fields.
///
/// `secret` is `Some(visible)` for password inputs.
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &str,
    hint: &str,
    secret: Option<bool>,
    enabled: bool,
    theme: &Theme,
) -> InputResponse {
    ui.label(RichText::new(label).size(14.0).color(theme.normal));

    let mut input = value.to_string();
    let mut visibility_clicked = false;

    let response = ui
        .horizontal(|ui| {
            let mut edit = egui::TextEdit::singleline(&mut input).hint_text(hint);
            if let Some(visible) = secret {
                edit = edit.password(!visible);
            }
            let response = ui.add_sized(INPUT_SIZE, edit);

            if let Some(visible) = secret {
                let toggle = egui::Button::new(if visible { "Hide" } else { "Show" }).small();
                if ui.add_enabled(enabled, toggle).clicked() {
                    visibility_clicked = true;
                }
            }
            response
        })
        .inner;

    let edited = (response.changed() && input != value).then_some(input);

    InputResponse {
        response,
        edited,
        visibility_clicked,
    }
}

/// Render the primary button. Disabled buttons still show their label.
pub fn render_button(
    ui: &mut egui::Ui,
    text: &str,
    enabled: bool,
    theme: &Theme,
) -> egui::Response {
    let button = egui::Button::new(RichText::new(text).size(16.0).strong().color(theme.on_accent))
        .fill(theme.accent)
        .min_size(egui::Vec2::new(INPUT_SIZE[0], 36.0));
    ui.add_enabled(enabled, button)
}

/// Render a text link
pub fn render_link(ui: &mut egui::Ui, text: &str, enabled: bool, theme: &Theme) -> egui::Response {
    ui.add_enabled(enabled, egui::Link::new(RichText::new(text).color(theme.accent)))
}

/// Render a form heading with its subtitle
pub fn render_form_heading(ui: &mut egui::Ui, heading: &str, subtitle: &str, theme: &Theme) {
    ui.label(RichText::new(heading).size(28.0).strong().color(theme.accent));
    ui.add_space(4.0);
    render_hint(ui, subtitle, theme);
    ui.add_space(20.0);
}

/// Render an inline field error
pub fn render_error(ui: &mut egui::Ui, error: &str, theme: &Theme) {
    ui.label(RichText::new(error).size(13.0).color(theme.error));
}

/// Render a help/hint text
pub fn render_hint(ui: &mut egui::Ui, hint: &str, theme: &Theme) {
    ui.label(RichText::new(hint).size(14.0).color(theme.dim));
}
