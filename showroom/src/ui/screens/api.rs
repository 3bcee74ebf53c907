//! # API Screen
//!
//! Developer-facing page. Shows a request sketch and, when signed in,
//! whether the current license tier carries API access; the upsell path
//! hands off to the pricing section on the landing page.

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use egui;
use shared::dto::UserRole;

const REQUEST_SKETCH: &str = "POST /v1/scans HTTP/1.1\n\
Authorization: Bearer sama_live_...\n\
Content-Type: application/json\n\
\n\
{\n\
  \"vehicle_hint\": \"sedan\",\n\
  \"frames\": 42,\n\
  \"grading\": \"full\"\n\
}";

/// Render the API page
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let colors = Theme::sama_colors();

    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        forms::render_eyebrow(ui, "Developers", &colors);
        ui.label(egui::RichText::new("SAMA Core API").size(30.0).strong());
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(
                "Push frames, poll for the graded report. Same pipeline the showroom runs, behind one endpoint.",
            )
            .size(14.0)
            .color(colors.text_dim),
        );

        ui.add_space(24.0);
        egui::Frame::new()
            .fill(egui::Color32::from_rgb(10, 6, 22))
            .stroke(egui::Stroke::new(1.0, colors.border))
            .corner_radius(egui::CornerRadius::same(10))
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(REQUEST_SKETCH)
                        .monospace()
                        .size(13.0)
                        .color(colors.green_success),
                );
            });

        ui.add_space(24.0);
        match state.session.as_ref() {
            Some(profile) if profile.role == UserRole::Expert => {
                ui.label(
                    egui::RichText::new(format!(
                        "Your Expert license includes full API access. Keys are provisioned for {}.",
                        profile.email
                    ))
                    .size(14.0),
                );
            }
            Some(profile) => {
                ui.label(
                    egui::RichText::new(format!(
                        "Signed in as {}. API access ships with the Expert tier.",
                        profile.email
                    ))
                    .size(14.0)
                    .color(colors.text_dim),
                );
                ui.add_space(8.0);
                if forms::render_primary_button(ui, "See plans", &colors, Some(egui::vec2(140.0, 38.0)))
                    .clicked()
                {
                    app.handle_navigate_to_pricing();
                }
            }
            None => {
                forms::render_hint(ui, "Sign in to provision a demo key, or compare plans first.", &colors);
                ui.add_space(8.0);
                if forms::render_primary_button(ui, "See plans", &colors, Some(egui::vec2(140.0, 38.0)))
                    .clicked()
                {
                    app.handle_navigate_to_pricing();
                }
            }
        }
    });
    ui.add_space(48.0);
}
