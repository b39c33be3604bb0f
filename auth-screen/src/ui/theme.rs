//! # GUI Theme
//!
//! Dark theme with a warm yellow accent for the auth window.

use egui::{Color32, Context, Theme as EguiTheme, Visuals};

/// Color palette of the auth window
#[derive(Debug, Clone)]
pub struct Theme {
    /// Window background
    pub background: Color32,
    /// Input background
    pub surface: Color32,
    /// Normal text color
    pub normal: Color32,
    /// Headings, primary button and links
    pub accent: Color32,
    /// Text drawn on top of the accent color
    pub on_accent: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    /// Inline field errors
    pub error: Color32,
    /// Signed-in banner
    pub success: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color32::from_rgb(17, 17, 17),     // #111111
            surface: Color32::from_rgb(31, 31, 31),        // #1F1F1F
            normal: Color32::from_rgb(245, 245, 245),      // #F5F5F5
            accent: Color32::from_rgb(255, 205, 17),       // #FFCD11
            on_accent: Color32::from_rgb(0, 0, 0),         // #000000
            dim: Color32::from_rgb(150, 150, 150),         // #969696
            error: Color32::from_rgb(239, 68, 68),         // #EF4444
            success: Color32::from_rgb(34, 197, 94),       // #22C55E
        }
    }
}

impl Theme {
    pub fn visuals(&self) -> Visuals {
        let mut visuals = Visuals::dark();
        visuals.override_text_color = Some(self.normal);
        visuals.panel_fill = self.background;
        visuals.window_fill = self.background;
        visuals.extreme_bg_color = self.surface;
        visuals.hyperlink_color = self.accent;
        visuals.selection.bg_fill = self.accent.linear_multiply(0.4);
        visuals
    }

    /// Apply to both egui themes so a system theme switch keeps the palette.
    pub fn apply(&self, ctx: &Context) {
        let visuals = self.visuals();
        for theme in [EguiTheme::Dark, EguiTheme::Light] {
            ctx.style_mut_of(theme, |style| {
                style.visuals = visuals.clone();
                style.spacing.item_spacing = egui::Vec2::new(8.0, 6.0);
                style.spacing.button_padding = egui::Vec2::new(12.0, 6.0);
                style.spacing.interact_size = egui::Vec2::new(32.0, 32.0);
            });
        }
        tracing::debug!("Applied auth window theme");
    }
}
