//! # Resources Screen
//!
//! Guide catalog with a hand-off to the community page.

use crate::app::{App, AppState, Screen};
use crate::ui::theme::{SamaColors, Theme};
use crate::ui::widgets::forms;
use egui;

const GUIDES: [(&str, &str); 4] = [
    (
        "Capture fundamentals",
        "Lighting, distance, and framing habits that keep confidence scores high.",
    ),
    (
        "Reading a damage report",
        "What each severity grade means and when to escalate to a physical inspection.",
    ),
    (
        "Fleet rollout playbook",
        "Onboarding fifty operators without drowning in duplicate scans.",
    ),
    (
        "API quickstart",
        "From the first authenticated request to a polled report in ten minutes.",
    ),
];

/// Render the resources page
pub fn render(ui: &mut egui::Ui, _state: &AppState, app: &mut App) {
    let colors = Theme::sama_colors();

    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        forms::render_eyebrow(ui, "Resources", &colors);
        ui.label(
            egui::RichText::new("Guides and references")
                .size(30.0)
                .strong(),
        );
    });

    ui.add_space(24.0);
    for (title, blurb) in GUIDES {
        render_guide_row(ui, title, blurb, &colors);
        ui.add_space(10.0);
    }

    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        forms::render_hint(ui, "Looking for other operators?", &colors);
        ui.add_space(6.0);
        if forms::render_primary_button(ui, "Visit the community", &colors, Some(egui::vec2(190.0, 40.0)))
            .clicked()
        {
            app.handle_navigate(Screen::Community);
        }
    });
    ui.add_space(48.0);
}

fn render_guide_row(ui: &mut egui::Ui, title: &str, blurb: &str, colors: &SamaColors) {
    egui::Frame::group(ui.style())
        .fill(colors.surface)
        .stroke(egui::Stroke::new(1.0, colors.border))
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width() - 28.0);
            ui.label(egui::RichText::new(title).size(16.0).strong());
            ui.label(egui::RichText::new(blurb).size(13.0).color(colors.text_dim));
        });
}
