//! # Notifications Widget
//!
//! Toast notifications using egui-notify. Implements [`NotificationSink`] so the form
//! controller can publish to it directly.

use egui_notify::Toasts;

use crate::core::service::{Notification, NotificationSink};

/// Notification manager for the application
#[derive(Default)]
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
    published: usize,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a success notification
    pub fn success(&mut self, message: String) {
        self.toasts.success(message);
    }

    /// Show an error notification
    pub fn error(&mut self, message: String) {
        self.toasts.error(message);
    }

    /// Number of notifications published since startup
    pub fn published(&self) -> usize {
        self.published
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}

impl NotificationSink for NotificationManager {
    fn notify(&mut self, notification: Notification) {
        tracing::debug!(
            title = %notification.title,
            destructive = notification.is_destructive(),
            "Showing notification"
        );
        self.published += 1;

        let text = toast_text(&notification);
        if notification.is_destructive() {
            self.error(text);
        } else {
            self.success(text);
        }
    }
}

/// Toast body: title on the first line, description below.
pub fn toast_text(notification: &Notification) -> String {
    if notification.description.is_empty() {
        notification.title.clone()
    } else {
        format!("{}\n{}", notification.title, notification.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_text_stacks_title_and_description() {
        let notification = Notification::destructive("Login Failed", "Invalid email or password");
        assert_eq!(toast_text(&notification), "Login Failed\nInvalid email or password");
        assert_eq!(toast_text(&Notification::success("Done", "")), "Done");
    }

    #[test]
    fn notify_counts_published_toasts() {
        let mut manager = NotificationManager::new();
        manager.notify(Notification::success("Reset Email Sent", "Check your email"));
        manager.notify(Notification::destructive("Error", "Something went wrong"));
        assert_eq!(manager.published(), 2);
    }
}
