//! # Floating Back Control
//!
//! Fixed-position back affordance shown on every screen except landing.
//! Anchored bottom-left, bottom-right under right-to-left languages, with
//! the arrow glyph flipped to match.

use crate::app::App;
use crate::ui::i18n;
use crate::ui::theme::Theme;
use egui;
use shared::dto::{Language, TextDirection};

/// Render the floating back control
pub fn render_back_button(ctx: &egui::Context, language: Language, app: &mut App) {
    let colors = Theme::sama_colors();
    let t = i18n::nav_strings(language);
    let rtl = language.direction() == TextDirection::RightToLeft;

    let (anchor, offset, arrow) = if rtl {
        (egui::Align2::RIGHT_BOTTOM, egui::vec2(-24.0, -24.0), "→")
    } else {
        (egui::Align2::LEFT_BOTTOM, egui::vec2(24.0, -24.0), "←")
    };

    egui::Area::new(egui::Id::new("floating_back"))
        .anchor(anchor, offset)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(colors.surface)
                .show(ui, |ui| {
                    let label = format!("{arrow}  {}", t.back.to_uppercase());
                    let button = egui::Button::new(
                        egui::RichText::new(label)
                            .size(13.0)
                            .strong()
                            .color(colors.accent_soft),
                    )
                    .frame(false);
                    if ui.add(button).clicked() {
                        app.handle_back();
                    }
                });
        });
}
