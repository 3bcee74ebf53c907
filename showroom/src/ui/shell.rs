//! # Application Shell
//!
//! The eframe application. Each frame drains pending app events, snapshots
//! state once, and routes to the active screen with the chrome around it.
//! Rendering never holds the state lock; handlers reacquire it briefly when
//! a widget fires.

use crate::app::{App, AppState, Screen};
use crate::ui::widgets::notifications::NotificationManager;
use crate::ui::{debug_overlay, screens, theme::Theme, widgets};
use std::time::Duration;

/// Idle repaint cadence. Timer and task events arrive over the channel, so
/// the frame loop keeps ticking even without input.
const IDLE_REPAINT: Duration = Duration::from_millis(100);

/// Top-level eframe application
pub struct Shell {
    app: App,
    notifications: NotificationManager,
    last_screen: Screen,
}

impl Shell {
    /// Build the shell and apply the SAMA theme to the egui context
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Theme::apply_sama_theme(&cc.egui_ctx);
        Self::with_app(App::new())
    }

    /// Build around an existing app
    pub fn with_app(app: App) -> Self {
        Self {
            app,
            notifications: NotificationManager::new(),
            last_screen: Screen::Landing,
        }
    }

    /// Move queued notifications out of the app state and into toasts
    fn drain_notifications(&mut self) {
        let pending = std::mem::take(&mut self.app.state.write().pending_notifications);
        for (level, message) in pending {
            self.notifications.dispatch(&level, message);
        }
    }
}

impl eframe::App for Shell {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drain async results (auth, analysis, timers) before rendering
        self.app.on_tick();
        self.drain_notifications();

        // Read state for rendering
        let state = {
            match self.app.state.try_read() {
                Some(state_guard) => state_guard.clone(),
                None => {
                    // Lock is held by a background task, skip this frame
                    ctx.request_repaint();
                    return;
                }
            }
        }; // Lock released here - rendering happens without holding lock

        let screen_changed = state.current_screen != self.last_screen;
        if screen_changed {
            self.last_screen = state.current_screen;
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(format!(
                "SAMA | {}",
                state.current_screen.title()
            )));
        }

        let app = &mut self.app;

        // Handle Ctrl+D to toggle debug overlay
        if ctx.input(|i| i.key_pressed(egui::Key::D) && i.modifiers.ctrl) {
            let mut state_write = app.state.write();
            state_write.debug_overlay_visible = !state_write.debug_overlay_visible;
        }

        if AppState::shows_chrome(state.current_screen) {
            egui::TopBottomPanel::top("nav_bar")
                .exact_height(56.0)
                .show(ctx, |ui| {
                    widgets::nav_bar::render_nav_bar(ui, &state, app);
                });
            egui::TopBottomPanel::bottom("footer")
                .exact_height(44.0)
                .show(ctx, |ui| {
                    widgets::footer::render_footer(ui, &state, app);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut scroll = egui::ScrollArea::vertical()
                .id_salt("screen_scroll")
                .auto_shrink([false; 2]);
            if screen_changed {
                // Every screen opens scrolled to the top
                scroll = scroll.vertical_scroll_offset(0.0);
            }
            scroll.show(ui, |ui| match state.current_screen {
                Screen::Landing => screens::landing::render(ui, &state, app),
                Screen::Dashboard => screens::dashboard::render(ui, &state, app),
                Screen::Capture => screens::capture::render(ui, &state, app),
                Screen::Platform => screens::platform::render(ui, &state, app),
                Screen::Enterprise => screens::enterprise::render(ui, &state, app),
                Screen::Api => screens::api::render(ui, &state, app),
                Screen::Resources => screens::resources::render(ui, &state, app),
                Screen::Community => screens::community::render(ui, &state, app),
                Screen::Checkout => screens::checkout::render(ui, &state, app),
            });
        });

        if AppState::shows_back(state.current_screen) {
            widgets::back_button::render_back_button(ctx, state.prefs.language, app);
        }

        // Modal and toasts sit above everything else
        widgets::auth_modal::render_auth_modal(ctx, &state, app);
        self.notifications.show(ctx);

        if debug_overlay::should_show_overlay(&state) {
            debug_overlay::render_debug_overlay(ctx, &state);
        }

        ctx.request_repaint_after(IDLE_REPAINT);
    }
}
