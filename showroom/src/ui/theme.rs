//! # GUI Theme
//!
//! SAMA dark theme for egui: deep purple-black background with violet
//! accents, soft corners, and muted gray secondary text.

use egui::Theme as EguiTheme;
use egui::{Color32, Context, CornerRadius, Stroke, Visuals};
use serde::{Deserialize, Serialize};
use shared::dto::DamageLevel;

/// Serializable theme configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Deep purple-black page background
    pub background: [u8; 3],
    /// Raised surfaces (dropdown, cards)
    pub surface: [u8; 3],
    /// Primary violet accent
    pub accent: [u8; 3],
    /// Lighter violet for links and highlights
    pub accent_soft: [u8; 3],
    /// Near-white body text
    pub text: [u8; 3],
    /// Muted gray secondary text
    pub text_dim: [u8; 3],
    /// Subtle outline color
    pub border: [u8; 3],
    /// Success green
    pub green_success: [u8; 3],
    /// Warning amber
    pub amber_warning: [u8; 3],
    /// Error red
    pub red_error: [u8; 3],
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            background: [15, 10, 30],
            surface: [26, 20, 46],
            accent: [147, 51, 234],
            accent_soft: [192, 132, 252],
            text: [243, 244, 246],
            text_dim: [156, 163, 175],
            border: [48, 40, 72],
            green_success: [52, 211, 153],
            amber_warning: [251, 191, 36],
            red_error: [248, 113, 113],
        }
    }
}

impl ThemeConfig {
    /// Convert ThemeConfig to SamaColors
    pub fn to_colors(&self) -> SamaColors {
        let rgb = |c: &[u8; 3]| Color32::from_rgb(c[0], c[1], c[2]);
        SamaColors {
            background: rgb(&self.background),
            surface: rgb(&self.surface),
            accent: rgb(&self.accent),
            accent_soft: rgb(&self.accent_soft),
            text: rgb(&self.text),
            text_dim: rgb(&self.text_dim),
            border: rgb(&self.border),
            green_success: rgb(&self.green_success),
            amber_warning: rgb(&self.amber_warning),
            red_error: rgb(&self.red_error),
        }
    }
}

/// SAMA color palette
#[derive(Clone)]
pub struct SamaColors {
    /// Deep purple-black page background
    pub background: Color32,
    /// Raised surfaces (dropdown, cards)
    pub surface: Color32,
    /// Primary violet accent
    pub accent: Color32,
    /// Lighter violet for links and highlights
    pub accent_soft: Color32,
    /// Near-white body text
    pub text: Color32,
    /// Muted gray secondary text
    pub text_dim: Color32,
    /// Subtle outline color
    pub border: Color32,
    /// Success green
    pub green_success: Color32,
    /// Warning amber
    pub amber_warning: Color32,
    /// Error red
    pub red_error: Color32,
}

impl Default for SamaColors {
    fn default() -> Self {
        ThemeConfig::default().to_colors()
    }
}

impl SamaColors {
    /// Badge color for a damage severity grade
    pub fn damage_color(&self, level: DamageLevel) -> Color32 {
        match level {
            DamageLevel::None => self.text_dim,
            DamageLevel::Low => self.green_success,
            DamageLevel::Medium => self.amber_warning,
            DamageLevel::High => self.red_error,
        }
    }

    /// Color for a confidence score: green above 0.9, amber above 0.75,
    /// red below that
    pub fn confidence_color(&self, confidence: f32) -> Color32 {
        if confidence >= 0.9 {
            self.green_success
        } else if confidence >= 0.75 {
            self.amber_warning
        } else {
            self.red_error
        }
    }
}

/// Application theme
pub struct Theme;

impl Theme {
    /// Create SAMA egui Visuals from ThemeConfig
    pub fn visuals_from_config(config: &ThemeConfig) -> Visuals {
        let colors = config.to_colors();
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(colors.text);

        // Backgrounds
        visuals.panel_fill = colors.background;
        visuals.window_fill = colors.surface;
        visuals.window_stroke = Stroke::new(1.0, colors.border);
        visuals.faint_bg_color = Color32::from_rgb(22, 16, 40);
        visuals.extreme_bg_color = Color32::from_rgb(10, 6, 22);

        // Non-interactive widgets
        visuals.widgets.noninteractive.bg_fill = colors.surface;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.text);
        visuals.widgets.noninteractive.corner_radius = CornerRadius::same(8);

        // Inactive widgets
        visuals.widgets.inactive.bg_fill = colors.surface;
        visuals.widgets.inactive.weak_bg_fill = Color32::from_rgb(34, 26, 58);
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, colors.border);
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors.text);
        visuals.widgets.inactive.corner_radius = CornerRadius::same(8);

        // Hovered widgets
        visuals.widgets.hovered.bg_fill = Color32::from_rgb(46, 34, 78);
        visuals.widgets.hovered.weak_bg_fill = Color32::from_rgb(46, 34, 78);
        visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, colors.accent_soft);
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.2, colors.text);
        visuals.widgets.hovered.corner_radius = CornerRadius::same(8);

        // Active/pressed widgets
        visuals.widgets.active.bg_fill = colors.accent;
        visuals.widgets.active.weak_bg_fill = Color32::from_rgb(88, 34, 140);
        visuals.widgets.active.bg_stroke = Stroke::new(1.0, colors.accent_soft);
        visuals.widgets.active.fg_stroke = Stroke::new(1.2, colors.text);
        visuals.widgets.active.corner_radius = CornerRadius::same(8);

        // Open (expanded) state
        visuals.widgets.open.bg_fill = Color32::from_rgb(46, 34, 78);
        visuals.widgets.open.bg_stroke = Stroke::new(1.0, colors.accent_soft);
        visuals.widgets.open.corner_radius = CornerRadius::same(8);

        // Selection highlight
        visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(147, 51, 234, 80);
        visuals.selection.stroke = Stroke::new(1.0, colors.accent_soft);

        visuals.hyperlink_color = colors.accent_soft;
        visuals.slider_trailing_fill = true;

        visuals
    }

    /// Apply a theme configuration to an egui context
    pub fn apply_custom_theme(ctx: &Context, config: &ThemeConfig) {
        let visuals = Self::visuals_from_config(config);

        // style_mut_of is the safe way to modify styles in egui 0.33
        ctx.style_mut_of(EguiTheme::Dark, |style| {
            style.visuals = visuals.clone();
            style.spacing.item_spacing = egui::Vec2::new(10.0, 8.0);
            style.spacing.window_margin = egui::Margin::same(16);
            style.spacing.button_padding = egui::Vec2::new(14.0, 7.0);
            style.spacing.indent = 18.0;
            style.spacing.menu_margin = egui::Margin::same(8);
        });

        // Also apply to light theme (in case the OS preference flips)
        ctx.style_mut_of(EguiTheme::Light, |style| {
            style.visuals = visuals;
            style.spacing.item_spacing = egui::Vec2::new(10.0, 8.0);
            style.spacing.window_margin = egui::Margin::same(16);
            style.spacing.button_padding = egui::Vec2::new(14.0, 7.0);
            style.spacing.indent = 18.0;
            style.spacing.menu_margin = egui::Margin::same(8);
        });
        ctx.set_theme(EguiTheme::Dark);

        tracing::debug!("Applied SAMA theme visuals and spacing");
    }

    /// Apply the default SAMA theme to an egui context
    pub fn apply_sama_theme(ctx: &Context) {
        Self::apply_custom_theme(ctx, &ThemeConfig::default());
    }

    /// Get the SAMA color palette
    pub fn sama_colors() -> SamaColors {
        SamaColors::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_to_colors() {
        let config = ThemeConfig::default();
        let colors = config.to_colors();
        assert_eq!(colors.background, Color32::from_rgb(15, 10, 30));
        assert_eq!(colors.accent, Color32::from_rgb(147, 51, 234));
    }

    #[test]
    fn damage_colors_track_severity() {
        let colors = SamaColors::default();
        assert_eq!(colors.damage_color(DamageLevel::High), colors.red_error);
        assert_eq!(colors.damage_color(DamageLevel::Medium), colors.amber_warning);
        assert_eq!(colors.damage_color(DamageLevel::Low), colors.green_success);
        assert_eq!(colors.damage_color(DamageLevel::None), colors.text_dim);
    }

    #[test]
    fn confidence_color_bands() {
        let colors = SamaColors::default();
        assert_eq!(colors.confidence_color(0.95), colors.green_success);
        assert_eq!(colors.confidence_color(0.8), colors.amber_warning);
        assert_eq!(colors.confidence_color(0.5), colors.red_error);
    }
}
