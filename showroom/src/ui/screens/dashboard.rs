//! # Fleet Overview Screen
//!
//! Signed-in home: welcome header, session stats, and the scan ledger
//! table. Rows expand in place; the expanded record's detail card carries
//! the findings, recommendations, and the delete and open-image actions.
//!
//! The screen stays reachable through back navigation after a sign-out,
//! so it renders a sign-in prompt instead of assuming a session.

use crate::app::{App, AppState, Screen};
use crate::ui::theme::{SamaColors, Theme};
use crate::ui::widgets::{forms, scan_card};
use egui;
use egui_extras::{Column, TableBuilder};
use shared::dto::ScanStatus;
use shared::utils::{format_confidence, relative_time};

/// Render the fleet overview
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let colors = Theme::sama_colors();

    let Some(profile) = state.session.as_ref() else {
        render_signed_out(ui, app, &colors);
        return;
    };

    ui.add_space(24.0);
    ui.horizontal(|ui| {
        ui.add_space(8.0);
        ui.vertical(|ui| {
            forms::render_eyebrow(ui, "Fleet overview", &colors);
            ui.label(
                egui::RichText::new(format!("Welcome back, {}", profile.first_name()))
                    .size(26.0)
                    .strong(),
            );
            ui.label(
                egui::RichText::new(format!(
                    "{} License  |  {} scans recorded",
                    profile.role.as_str(),
                    profile.scan_count
                ))
                .size(12.0)
                .color(colors.text_dim),
            );
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(8.0);
            if forms::render_primary_button(ui, "+ New scan", &colors, Some(egui::vec2(130.0, 38.0)))
                .clicked()
            {
                app.handle_navigate(Screen::Capture);
            }
        });
    });
    ui.add_space(18.0);

    if state.scans.is_empty() {
        render_empty_ledger(ui, app, &colors);
        return;
    }

    render_ledger_table(ui, state, app, &colors);

    if let Some(id) = state.expanded_scan.as_deref() {
        if let Some(record) = state.scans.iter().find(|scan| scan.id == id) {
            ui.add_space(14.0);
            scan_card::render_scan_details(ui, record, app);
        }
    }
    ui.add_space(32.0);
}

fn render_ledger_table(ui: &mut egui::Ui, state: &AppState, app: &mut App, colors: &SamaColors) {
    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(110.0))
        .column(Column::remainder())
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(100.0))
        .column(Column::auto().at_least(80.0))
        .header(26.0, |mut header| {
            for title in ["SCAN", "VEHICLE", "CAPTURED", "DAMAGE", "CONFIDENCE", "STATUS"] {
                header.col(|ui| {
                    ui.label(
                        egui::RichText::new(title)
                            .size(11.0)
                            .strong()
                            .color(colors.text_dim),
                    );
                });
            }
        })
        .body(|mut body| {
            // Ledger order is newest first; render as stored
            for record in &state.scans {
                let expanded = state.expanded_scan.as_deref() == Some(record.id.as_str());
                body.row(30.0, |mut row| {
                    row.col(|ui| {
                        let id_label = egui::RichText::new(&record.id)
                            .strong()
                            .color(colors.accent_soft);
                        if ui.selectable_label(expanded, id_label).clicked() {
                            app.handle_scan_toggle(&record.id);
                        }
                    });
                    row.col(|ui| {
                        ui.label(&record.vehicle_model);
                    });
                    row.col(|ui| {
                        ui.label(
                            egui::RichText::new(relative_time(record.timestamp))
                                .size(12.0)
                                .color(colors.text_dim),
                        );
                    });
                    row.col(|ui| {
                        scan_card::render_damage_badge(ui, record.damage_level);
                    });
                    row.col(|ui| {
                        ui.label(
                            egui::RichText::new(format_confidence(record.confidence))
                                .color(colors.confidence_color(record.confidence)),
                        );
                    });
                    row.col(|ui| {
                        let status_color = match record.status {
                            ScanStatus::Ready => colors.green_success,
                            ScanStatus::Processing => colors.amber_warning,
                        };
                        ui.label(
                            egui::RichText::new(record.status.as_str())
                                .size(12.0)
                                .color(status_color),
                        );
                    });
                });
            }
        });
}

fn render_empty_ledger(ui: &mut egui::Ui, app: &mut App, colors: &SamaColors) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.label(egui::RichText::new("No scans yet").size(20.0).strong());
        forms::render_hint(ui, "Run your first capture to start the ledger.", colors);
        ui.add_space(12.0);
        if forms::render_primary_button(ui, "Run a scan", colors, Some(egui::vec2(150.0, 38.0)))
            .clicked()
        {
            app.handle_navigate(Screen::Capture);
        }
    });
}

fn render_signed_out(ui: &mut egui::Ui, app: &mut App, colors: &SamaColors) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.label(egui::RichText::new("Session ended").size(22.0).strong());
        forms::render_hint(ui, "Sign in again to view the fleet overview.", colors);
        ui.add_space(12.0);
        if forms::render_primary_button(ui, "Sign in", colors, Some(egui::vec2(130.0, 36.0)))
            .clicked()
        {
            app.handle_sign_in_clicked();
        }
    });
}
