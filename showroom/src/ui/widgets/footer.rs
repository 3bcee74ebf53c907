//! # Page Footer
//!
//! Logo, legal links, and copyright line. Hidden on the checkout screen
//! along with the rest of the chrome; mirrors under right-to-left languages.

use crate::app::{App, AppState, Screen};
use crate::ui::theme::Theme;
use egui;
use shared::dto::TextDirection;

/// Render the footer strip
pub fn render_footer(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let colors = Theme::sama_colors();
    let rtl = state.prefs.language.direction() == TextDirection::RightToLeft;

    let layout = if rtl {
        egui::Layout::right_to_left(egui::Align::Center)
    } else {
        egui::Layout::left_to_right(egui::Align::Center)
    };

    let links: [&str; 4] = if rtl {
        ["سياسة الخصوصية", "شروط الخدمة", "الحالة", "اتصل بنا"]
    } else {
        ["Privacy Policy", "Terms of Service", "Status", "Contact"]
    };
    let rights = if rtl {
        "جميع الحقوق محفوظة."
    } else {
        "All rights reserved."
    };

    ui.allocate_ui_with_layout(egui::vec2(ui.available_width(), 40.0), layout, |ui| {
        ui.add_space(16.0);

        let logo = egui::Button::new(
            egui::RichText::new("SAMA")
                .size(16.0)
                .strong()
                .color(colors.accent_soft),
        )
        .frame(false);
        if ui.add(logo).clicked() {
            app.handle_navigate(Screen::Landing);
        }

        ui.add_space(24.0);
        for link in links {
            // Dead links, same as the marketing site
            let _ = ui.link(egui::RichText::new(link).size(12.0).color(colors.text_dim));
            ui.add_space(8.0);
        }

        let trailing = if rtl {
            egui::Layout::left_to_right(egui::Align::Center)
        } else {
            egui::Layout::right_to_left(egui::Align::Center)
        };
        ui.with_layout(trailing, |ui| {
            ui.add_space(16.0);
            ui.label(
                egui::RichText::new(format!("© 2025 SAMA Systems Inc. {rights}"))
                    .size(12.0)
                    .color(colors.text_dim),
            );
        });
    });
}
