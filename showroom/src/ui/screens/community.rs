//! # Community Screen
//!
//! Operator community page, reached from resources.

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use egui;

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("4,200+", "operators comparing grading baselines"),
    ("380", "shared capture presets for tricky paint finishes"),
    ("52", "fleet rollout retrospectives, searchable"),
];

/// Render the community page
pub fn render(ui: &mut egui::Ui, _state: &AppState, app: &mut App) {
    let colors = Theme::sama_colors();

    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        forms::render_eyebrow(ui, "Community", &colors);
        ui.label(
            egui::RichText::new("Operators helping operators")
                .size(30.0)
                .strong(),
        );
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(
                "Capture tricks, grading disputes, and rollout war stories from people who scan vehicles all day.",
            )
            .size(14.0)
            .color(colors.text_dim),
        );

        ui.add_space(28.0);
        for (figure, caption) in HIGHLIGHTS {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(figure)
                        .size(22.0)
                        .strong()
                        .color(colors.accent_soft),
                );
                ui.label(egui::RichText::new(caption).size(14.0).color(colors.text_dim));
            });
        }

        ui.add_space(28.0);
        if forms::render_ghost_button(ui, "Back to resources", &colors).clicked() {
            app.handle_navigate(Screen::Resources);
        }
    });
    ui.add_space(48.0);
}
