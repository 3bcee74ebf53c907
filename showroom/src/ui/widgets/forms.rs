//! # Form Components
//!
//! Reusable form elements for consistent UI across screens

use crate::ui::theme::SamaColors;
use egui;

/// Render a labeled single-line text input
pub fn render_text_input(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    hint: &str,
    colors: &SamaColors,
    size: [f32; 2],
) -> egui::Response {
    ui.label(
        egui::RichText::new(label)
            .size(12.0)
            .color(colors.text_dim),
    );
    ui.add_sized(
        size,
        egui::TextEdit::singleline(value).hint_text(hint),
    )
}

/// Render a filled accent button
pub fn render_primary_button(
    ui: &mut egui::Ui,
    text: &str,
    colors: &SamaColors,
    min_size: Option<egui::Vec2>,
) -> egui::Response {
    let mut button = egui::Button::new(egui::RichText::new(text).strong()).fill(colors.accent);
    if let Some(size) = min_size {
        button = button.min_size(size);
    }
    ui.add(button)
}

/// Render a frameless text button
pub fn render_ghost_button(
    ui: &mut egui::Ui,
    text: &str,
    colors: &SamaColors,
) -> egui::Response {
    ui.add(egui::Button::new(egui::RichText::new(text).color(colors.text_dim)).frame(false))
}

/// Render a section heading
pub fn render_section_heading(ui: &mut egui::Ui, text: &str, colors: &SamaColors) {
    ui.label(
        egui::RichText::new(text)
            .size(24.0)
            .strong()
            .color(colors.text),
    );
    ui.add_space(12.0);
}

/// Render a small uppercase eyebrow label above a heading
pub fn render_eyebrow(ui: &mut egui::Ui, text: &str, colors: &SamaColors) {
    ui.label(
        egui::RichText::new(text.to_uppercase())
            .size(11.0)
            .strong()
            .color(colors.accent_soft),
    );
}

/// Render an error message
pub fn render_error(ui: &mut egui::Ui, error: &str, colors: &SamaColors) {
    ui.label(egui::RichText::new(error).color(colors.red_error));
    ui.add_space(6.0);
}

/// Render a help/hint text
pub fn render_hint(ui: &mut egui::Ui, hint: &str, colors: &SamaColors) {
    ui.label(
        egui::RichText::new(hint)
            .size(12.0)
            .color(colors.text_dim),
    );
}
