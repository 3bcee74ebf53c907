//! # Scan Ledger Cards
//!
//! Severity badge and the expanded detail card for a ledger row. The
//! table itself lives in the dashboard screen; these pieces are shared
//! with the capture flow's result preview.

use crate::app::App;
use crate::ui::theme::Theme;
use egui;
use shared::dto::{DamageLevel, ScanRecord};
use shared::utils::format_confidence;

/// Render a pill-shaped severity badge
pub fn render_damage_badge(ui: &mut egui::Ui, level: DamageLevel) {
    let colors = Theme::sama_colors();
    let color = colors.damage_color(level);
    egui::Frame::new()
        .fill(color.gamma_multiply(0.18))
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(level.as_str())
                    .size(11.0)
                    .strong()
                    .color(color),
            );
        });
}

/// Render the expanded detail card for a ledger row
pub fn render_scan_details(ui: &mut egui::Ui, record: &ScanRecord, app: &mut App) {
    let colors = Theme::sama_colors();

    egui::Frame::group(ui.style())
        .fill(colors.surface)
        .stroke(egui::Stroke::new(1.0, colors.border))
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(&record.vehicle_model)
                        .size(16.0)
                        .strong(),
                );
                render_damage_badge(ui, record.damage_level);
                ui.label(
                    egui::RichText::new(format!(
                        "Confidence {}",
                        format_confidence(record.confidence)
                    ))
                    .size(12.0)
                    .color(colors.text_dim),
                );
            });
            ui.add_space(6.0);

            if !record.findings.is_empty() {
                ui.label(
                    egui::RichText::new("FINDINGS")
                        .size(10.0)
                        .strong()
                        .color(colors.text_dim),
                );
                for finding in &record.findings {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new("•").color(colors.accent_soft));
                        ui.label(egui::RichText::new(finding).size(13.0));
                    });
                }
                ui.add_space(4.0);
            }

            if !record.recommendations.is_empty() {
                ui.label(
                    egui::RichText::new("RECOMMENDED ACTIONS")
                        .size(10.0)
                        .strong()
                        .color(colors.text_dim),
                );
                for recommendation in &record.recommendations {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new("•").color(colors.green_success));
                        ui.label(egui::RichText::new(recommendation).size(13.0));
                    });
                }
            }

            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if record.image_url.is_some() && ui.button("Open capture image").clicked() {
                    app.handle_scan_image_open(&record.id);
                }
                if ui
                    .button(egui::RichText::new("Delete scan").color(colors.red_error))
                    .clicked()
                {
                    app.handle_scan_delete(&record.id);
                }
            });
        });
}
