//! # Navigation Bar
//!
//! Top chrome: logo, marketing links, fleet overview entry, the account
//! chip with its hover dropdown, and the language and currency selectors.
//! The whole bar mirrors when the active language reads right-to-left.
//!
//! The chip and dropdown report a combined hover flag to
//! [`crate::app::App::handle_dropdown_hover`] every frame; the close delay
//! and its cancellation live in the app layer, not here.

use crate::app::{App, AppState, Screen};
use crate::ui::i18n::{self, NavStrings};
use crate::ui::theme::{SamaColors, Theme};
use egui;
use shared::dto::{Currency, Language, TextDirection, UserProfile};

const DROPDOWN_WIDTH: f32 = 270.0;

/// Render the top navigation bar
pub fn render_nav_bar(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let colors = Theme::sama_colors();
    let t = i18n::nav_strings(state.prefs.language);
    let rtl = state.prefs.language.direction() == TextDirection::RightToLeft;

    let main_layout = if rtl {
        egui::Layout::right_to_left(egui::Align::Center)
    } else {
        egui::Layout::left_to_right(egui::Align::Center)
    };
    let trailing_layout = if rtl {
        egui::Layout::left_to_right(egui::Align::Center)
    } else {
        egui::Layout::right_to_left(egui::Align::Center)
    };

    let mut hover_region = false;
    let mut chip_anchor: Option<egui::Rect> = None;

    ui.allocate_ui_with_layout(
        egui::vec2(ui.available_width(), 56.0),
        main_layout,
        |ui| {
            ui.add_space(16.0);

            let logo = egui::Button::new(
                egui::RichText::new("SAMA")
                    .size(22.0)
                    .strong()
                    .color(colors.accent_soft),
            )
            .frame(false);
            if ui.add(logo).clicked() {
                app.handle_navigate(Screen::Landing);
            }

            ui.add_space(24.0);

            for (label, screen) in [
                (t.platform, Screen::Platform),
                (t.enterprise, Screen::Enterprise),
                (t.api, Screen::Api),
                (t.resources, Screen::Resources),
            ] {
                let active = state.current_screen == screen;
                let text = if active {
                    egui::RichText::new(label).strong().color(colors.accent_soft)
                } else {
                    egui::RichText::new(label).color(colors.text_dim)
                };
                if ui.add(egui::Button::new(text).frame(false)).clicked() {
                    app.handle_navigate(screen);
                }
            }

            ui.with_layout(trailing_layout, |ui| {
                ui.add_space(16.0);

                // Fleet overview entry; the navigator redirects signed-out
                // users to the sign-in modal
                let overview = egui::Button::new(
                    egui::RichText::new(t.overview)
                        .strong()
                        .color(egui::Color32::BLACK),
                )
                .fill(egui::Color32::WHITE);
                if ui.add(overview).clicked() {
                    app.handle_navigate(Screen::Dashboard);
                }

                ui.add_space(4.0);

                // Account chip: first name when signed in, otherwise sign-in
                let chip_label = match &state.session {
                    Some(profile) => profile.first_name().to_string(),
                    None => t.sign_in.to_string(),
                };
                let chip = ui.add(egui::Button::new(
                    egui::RichText::new(chip_label)
                        .strong()
                        .color(colors.accent_soft),
                ));
                if chip.clicked() {
                    app.handle_sign_in_clicked();
                }
                hover_region |= chip.contains_pointer();
                chip_anchor = Some(chip.rect);

                ui.add_space(8.0);
                render_currency_select(ui, state, app);
                render_language_select(ui, state, app);
            });
        },
    );

    if state.dropdown_open {
        if let (Some(anchor), Some(profile)) = (chip_anchor, state.session.as_ref()) {
            hover_region |= render_profile_dropdown(ui.ctx(), anchor, profile, t, rtl, &colors, app);
        }
    }

    // Combined chip-or-dropdown hover; edges drive the open/close timers
    app.handle_dropdown_hover(hover_region);
}

fn render_language_select(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    egui::ComboBox::from_id_salt("nav_language")
        .selected_text(state.prefs.language.as_str())
        .width(104.0)
        .show_ui(ui, |ui| {
            for language in Language::all() {
                let selected = state.prefs.language == language;
                if ui.selectable_label(selected, language.as_str()).clicked() && !selected {
                    app.handle_language_change(language);
                }
            }
        });
}

fn render_currency_select(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    egui::ComboBox::from_id_salt("nav_currency")
        .selected_text(state.prefs.currency.code())
        .width(84.0)
        .show_ui(ui, |ui| {
            for currency in Currency::all() {
                let selected = state.prefs.currency == currency;
                let label = format!("{} ({})", currency.code(), currency.symbol());
                if ui.selectable_label(selected, label).clicked() && !selected {
                    app.handle_currency_change(currency);
                }
            }
        });
}

/// Render the profile dropdown under the account chip.
///
/// Returns whether the pointer is currently over the dropdown so the caller
/// can fold it into the hover region.
fn render_profile_dropdown(
    ctx: &egui::Context,
    anchor: egui::Rect,
    profile: &UserProfile,
    t: &NavStrings,
    rtl: bool,
    colors: &SamaColors,
    app: &mut App,
) -> bool {
    // Anchored under the chip, aligned to its outer edge
    let pos = if rtl {
        egui::pos2(anchor.left(), anchor.bottom() + 8.0)
    } else {
        egui::pos2(anchor.right() - DROPDOWN_WIDTH, anchor.bottom() + 8.0)
    };

    let area = egui::Area::new(egui::Id::new("profile_dropdown"))
        .order(egui::Order::Foreground)
        .fixed_pos(pos)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style())
                .fill(colors.surface)
                .show(ui, |ui| {
                    ui.set_width(DROPDOWN_WIDTH - 24.0);

                    let header = if rtl { "الملف الشخصي" } else { "Active Profile" };
                    ui.label(
                        egui::RichText::new(header)
                            .size(10.0)
                            .strong()
                            .color(colors.text_dim),
                    );
                    ui.label(egui::RichText::new(&profile.display_name).strong());
                    ui.label(
                        egui::RichText::new(format!("{} License", profile.role.as_str()))
                            .size(10.0)
                            .strong()
                            .color(colors.accent_soft),
                    );
                    ui.separator();

                    if ui
                        .add(
                            egui::Button::new(
                                egui::RichText::new(t.sign_out).color(colors.text_dim),
                            )
                            .frame(false),
                        )
                        .clicked()
                    {
                        app.handle_sign_out();
                    }
                    if ui
                        .add(
                            egui::Button::new(
                                egui::RichText::new(t.switch_profile).color(colors.text_dim),
                            )
                            .frame(false),
                        )
                        .clicked()
                    {
                        app.handle_switch_profile();
                    }
                });
        });

    area.response.contains_pointer()
}
