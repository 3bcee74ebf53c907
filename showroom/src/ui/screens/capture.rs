//! # Capture Screen
//!
//! The simulated scan flow. Idle shows a viewfinder placeholder and the
//! scan trigger; once a pass is running the screen holds on a progress
//! state until the analyzer task reports back. Results land in the ledger
//! and navigation moves to the fleet overview from the event handler, not
//! from here.

use crate::app::{App, AppState, CapturePhase, Screen};
use crate::ui::theme::{SamaColors, Theme};
use crate::ui::widgets::forms;
use egui;

/// Render the capture flow
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let colors = Theme::sama_colors();

    // Reachable signed-out through back navigation after a sign-out
    if state.session.is_none() {
        ui.vertical_centered(|ui| {
            ui.add_space(80.0);
            ui.label(egui::RichText::new("Session ended").size(22.0).strong());
            forms::render_hint(ui, "Sign in again to run a scan.", &colors);
            ui.add_space(12.0);
            if forms::render_primary_button(ui, "Sign in", &colors, Some(egui::vec2(130.0, 36.0)))
                .clicked()
            {
                app.handle_sign_in_clicked();
            }
        });
        return;
    }

    match state.capture.phase {
        CapturePhase::Idle => render_idle(ui, app, &colors),
        CapturePhase::Scanning => render_scanning(ui, &colors),
    }
}

fn render_idle(ui: &mut egui::Ui, app: &mut App, colors: &SamaColors) {
    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        forms::render_eyebrow(ui, "New scan", colors);
        ui.label(egui::RichText::new("Capture the vehicle").size(26.0).strong());
        forms::render_hint(
            ui,
            "Frame the full body panel. The demo feeds a simulated capture into the analyzer.",
            colors,
        );
        ui.add_space(18.0);

        // Viewfinder placeholder
        egui::Frame::new()
            .fill(egui::Color32::from_rgb(10, 6, 22))
            .stroke(egui::Stroke::new(1.0, colors.border))
            .corner_radius(egui::CornerRadius::same(16))
            .show(ui, |ui| {
                ui.set_min_size(egui::vec2(440.0, 260.0));
                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new("Align the vehicle inside the frame")
                            .size(14.0)
                            .color(colors.text_dim),
                    );
                });
            });

        ui.add_space(18.0);
        if forms::render_primary_button(ui, "Run damage scan", colors, Some(egui::vec2(190.0, 42.0)))
            .clicked()
        {
            app.handle_scan_start();
        }
        ui.add_space(4.0);
        if forms::render_ghost_button(ui, "Back to overview", colors).clicked() {
            app.handle_navigate(Screen::Dashboard);
        }
    });
}

fn render_scanning(ui: &mut egui::Ui, colors: &SamaColors) {
    ui.vertical_centered(|ui| {
        ui.add_space(120.0);
        ui.spinner();
        ui.add_space(14.0);
        ui.label(egui::RichText::new("Analyzing frames...").size(20.0).strong());
        forms::render_hint(
            ui,
            "Depth maps, panel segmentation, and damage grading run in sequence.",
            colors,
        );
    });
}
