//! # Notifications Widget
//!
//! Toast notification system using egui-notify. Handlers and background
//! tasks queue `(level, message)` pairs on the app state; the shell drains
//! the queue into toasts once per frame.

use egui_notify::Toasts;
use std::time::Duration;

const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Notification manager for the application
pub struct NotificationManager {
    /// Toast notification system
    pub toasts: Toasts,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self {
            toasts: Toasts::default(),
        }
    }
}

impl NotificationManager {
    /// Create a new notification manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Route a queued notification to the matching toast level.
    ///
    /// Unknown levels degrade to info rather than being dropped.
    pub fn dispatch(&mut self, level: &str, message: String) {
        let toast = match level {
            "success" => self.toasts.success(message),
            "error" => self.toasts.error(message),
            "warning" => self.toasts.warning(message),
            _ => self.toasts.info(message),
        };
        toast.duration(Some(TOAST_DURATION));
    }

    /// Show a success notification
    pub fn success(&mut self, message: String) {
        self.dispatch("success", message);
    }

    /// Show an error notification
    pub fn error(&mut self, message: String) {
        self.dispatch("error", message);
    }

    /// Show an info notification
    pub fn info(&mut self, message: String) {
        self.dispatch("info", message);
    }

    /// Render notifications in the UI context
    pub fn show(&mut self, ctx: &egui::Context) {
        self.toasts.show(ctx);
    }
}
