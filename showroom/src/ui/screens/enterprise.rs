//! # Enterprise Screen
//!
//! Marketing page for fleet-scale deployments. The contact action raises
//! a toast; the demo sends nothing anywhere.

use crate::app::{App, AppState};
use crate::ui::theme::Theme;
use crate::ui::widgets::forms;
use egui;

const COMMITMENTS: [&str; 4] = [
    "Single sign-on and per-seat license management",
    "Contractual accuracy SLAs on fleet audits",
    "On-premise frame ingestion for closed networks",
    "Custom damage models trained on your claim history",
];

/// Render the enterprise page
pub fn render(ui: &mut egui::Ui, _state: &AppState, app: &mut App) {
    let colors = Theme::sama_colors();

    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        forms::render_eyebrow(ui, "Enterprise", &colors);
        ui.label(
            egui::RichText::new("Damage intelligence at fleet scale")
                .size(30.0)
                .strong(),
        );
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(
                "Rental returns, end-of-lease inspections, and insurance claims run on the same ledger your operators already use.",
            )
            .size(14.0)
            .color(colors.text_dim),
        );

        ui.add_space(24.0);
        for commitment in COMMITMENTS {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("•").color(colors.accent_soft));
                ui.label(egui::RichText::new(commitment).size(14.0));
            });
        }

        ui.add_space(24.0);
        if forms::render_primary_button(ui, "Talk to our team", &colors, Some(egui::vec2(180.0, 42.0)))
            .clicked()
        {
            app.state.write().pending_notifications.push((
                "info".to_string(),
                "Thanks for the interest. The demo stops here; no request was sent.".to_string(),
            ));
        }
    });
    ui.add_space(48.0);
}
