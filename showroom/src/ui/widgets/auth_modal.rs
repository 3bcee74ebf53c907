//! # Sign-In Modal
//!
//! Centered modal window for the demo sign-in flow. Any email passes; the
//! fields live in [`crate::app::AuthModalState`] so the busy and error
//! states survive across frames while the provider runs.

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use egui;

/// Render the sign-in modal when it is open
pub fn render_auth_modal(ctx: &egui::Context, state: &AppState, app: &mut App) {
    if !state.auth_modal.open {
        return;
    }

    let colors = Theme::sama_colors();

    // Local mutable copies for the text inputs
    let mut email_input = state.auth_modal.email.clone();
    let mut name_input = state.auth_modal.display_name.clone();
    let busy = state.auth_modal.busy;
    let mut submit = false;
    let mut cancel = false;

    egui::Window::new("Sign in to SAMA")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.set_width(320.0);
            forms::render_hint(ui, "Demo sign-in. Any email works; nothing is verified.", &colors);
            ui.add_space(10.0);

            let email_response = ui.add_enabled_ui(!busy, |ui| {
                forms::render_text_input(
                    ui,
                    "Email",
                    &mut email_input,
                    "you@company.com",
                    &colors,
                    [300.0, 28.0],
                )
            });
            ui.add_space(8.0);
            let name_response = ui.add_enabled_ui(!busy, |ui| {
                forms::render_text_input(
                    ui,
                    "Display name",
                    &mut name_input,
                    "Alex Carter",
                    &colors,
                    [300.0, 28.0],
                )
            });

            // Enter submits from either field
            let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
            if enter && (email_response.inner.lost_focus() || name_response.inner.lost_focus()) {
                submit = true;
            }

            ui.add_space(10.0);
            if let Some(error) = state.auth_modal.error.as_deref() {
                forms::render_error(ui, error, &colors);
            }

            ui.horizontal(|ui| {
                if busy {
                    ui.spinner();
                    forms::render_hint(ui, "Contacting identity service...", &colors);
                } else {
                    if forms::render_primary_button(ui, "Sign in", &colors, Some(egui::vec2(110.0, 32.0)))
                        .clicked()
                    {
                        submit = true;
                    }
                    ui.add_space(6.0);
                    if forms::render_ghost_button(ui, "Cancel", &colors).clicked() {
                        cancel = true;
                    }
                }
            });
        });

    if cancel {
        app.handle_auth_cancel();
        return;
    }

    // Persist the edits, then submit with the state the user last saw
    {
        let mut state = app.state.write();
        state.auth_modal.email = email_input;
        state.auth_modal.display_name = name_input;
    } // Lock released here

    if submit {
        app.handle_auth_submit();
    }
}
