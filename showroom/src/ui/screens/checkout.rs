//! # Checkout Screen
//!
//! Chrome-free order summary for the staged plan. Completing applies the
//! role and consumes the intent; cancelling clears the intent and returns
//! to the landing page. The navigation gate keeps this screen out of reach
//! when nothing is staged, but back-stepping can still land here, so the
//! empty case renders a pointer to pricing instead of a summary.

use crate::app::{App, AppState};
use crate::ui::theme::{SamaColors, Theme};
use crate::ui::widgets::forms;
use egui;

/// Render the checkout overlay
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let colors = Theme::sama_colors();

    let Some(intent) = state.checkout else {
        ui.vertical_centered(|ui| {
            ui.add_space(90.0);
            ui.label(egui::RichText::new("No plan staged").size(22.0).strong());
            forms::render_hint(ui, "Pick a plan from the pricing section first.", &colors);
            ui.add_space(12.0);
            if forms::render_ghost_button(ui, "See pricing", &colors).clicked() {
                app.handle_navigate_to_pricing();
            }
        });
        return;
    };

    let cadence = if intent.yearly { "Yearly" } else { "Monthly" };
    let suffix = if intent.yearly { "/yr" } else { "/mo" };
    let price = state
        .prefs
        .currency
        .format_amount(intent.plan.price_usd(intent.yearly));

    ui.vertical_centered(|ui| {
        ui.add_space(56.0);
        forms::render_eyebrow(ui, "Checkout", &colors);
        ui.label(
            egui::RichText::new(format!("SAMA {}", intent.plan.label()))
                .size(28.0)
                .strong(),
        );
        ui.add_space(18.0);

        egui::Frame::group(ui.style())
            .fill(colors.surface)
            .stroke(egui::Stroke::new(1.0, colors.border))
            .corner_radius(egui::CornerRadius::same(12))
            .inner_margin(egui::Margin::same(18))
            .show(ui, |ui| {
                ui.set_width(360.0);
                summary_row(ui, &colors, "Plan", &format!("SAMA {}", intent.plan.label()));
                summary_row(ui, &colors, "Billing", cadence);
                summary_row(ui, &colors, "License", intent.plan.role().as_str());
                ui.separator();
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Due today").strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new(suffix).color(colors.text_dim));
                        ui.label(
                            egui::RichText::new(price)
                                .size(22.0)
                                .strong()
                                .color(colors.accent_soft),
                        );
                    });
                });
            });

        ui.add_space(18.0);
        if forms::render_primary_button(ui, "Complete purchase", &colors, Some(egui::vec2(220.0, 44.0)))
            .clicked()
        {
            app.handle_checkout_complete();
        }
        ui.add_space(4.0);
        if forms::render_ghost_button(ui, "Cancel and go back", &colors).clicked() {
            app.handle_checkout_cancel();
        }
        ui.add_space(10.0);
        forms::render_hint(ui, "Simulated checkout. No payment is processed.", &colors);
    });
}

fn summary_row(ui: &mut egui::Ui, colors: &SamaColors, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).color(colors.text_dim));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(egui::RichText::new(value).strong());
        });
    });
}
