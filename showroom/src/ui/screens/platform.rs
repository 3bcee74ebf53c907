//! # Platform Screen
//!
//! Marketing page for the capture platform itself.

use crate::app::{App, AppState, Screen};
use crate::ui::theme::{SamaColors, Theme};
use crate::ui::widgets::forms;
use egui;

const FEATURES: [(&str, &str); 3] = [
    (
        "Capture pipeline",
        "Any camera becomes a calibrated sensor. Frames stream through depth estimation and panel segmentation before a single grade is made.",
    ),
    (
        "Damage grading",
        "Every panel gets a severity grade with a confidence score, so adjusters can triage by risk instead of reading raw imagery.",
    ),
    (
        "Fleet reporting",
        "Scans roll up into a per-vehicle ledger with findings and recommended actions ready for export.",
    ),
];

/// Render the platform page
pub fn render(ui: &mut egui::Ui, _state: &AppState, app: &mut App) {
    let colors = Theme::sama_colors();

    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        forms::render_eyebrow(ui, "Platform", &colors);
        ui.label(
            egui::RichText::new("From raw frames to a filed report")
                .size(30.0)
                .strong(),
        );
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(
                "One pipeline handles capture, analysis, and reporting. No rigs, no light tunnels, no manual grading.",
            )
            .size(14.0)
            .color(colors.text_dim),
        );
    });

    ui.add_space(32.0);
    ui.columns(3, |columns| {
        for (column, (title, blurb)) in columns.iter_mut().zip(FEATURES.iter()) {
            render_feature_card(column, title, blurb, &colors);
        }
    });

    ui.add_space(32.0);
    ui.vertical_centered(|ui| {
        if forms::render_primary_button(ui, "Try a scan", &colors, Some(egui::vec2(160.0, 42.0)))
            .clicked()
        {
            app.handle_navigate(Screen::Capture);
        }
    });
    ui.add_space(48.0);
}

fn render_feature_card(ui: &mut egui::Ui, title: &str, blurb: &str, colors: &SamaColors) {
    egui::Frame::group(ui.style())
        .fill(colors.surface)
        .stroke(egui::Stroke::new(1.0, colors.border))
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_min_height(150.0);
            ui.label(egui::RichText::new(title).size(17.0).strong());
            ui.add_space(6.0);
            ui.label(egui::RichText::new(blurb).size(13.0).color(colors.text_dim));
        });
}
