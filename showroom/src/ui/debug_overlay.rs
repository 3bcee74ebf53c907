//! In-UI debug overlay (toggle with Ctrl+D)

use egui;

use crate::app::{AppState, CapturePhase};

/// Render debug overlay as an egui window
pub fn render_debug_overlay(ctx: &egui::Context, state: &AppState) {
    egui::Window::new("Debug Monitor")
        .collapsible(true)
        .resizable(true)
        .default_size([320.0, 440.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Navigation");
                ui.label(format!("Screen: {:?}", state.current_screen));
                let trail = state
                    .history
                    .iter()
                    .map(|screen| format!("{screen:?}"))
                    .collect::<Vec<_>>()
                    .join(" > ");
                ui.label(format!("Stack ({}): {}", state.history.len(), trail));
                if let Some(anchor) = state.pending_scroll {
                    ui.colored_label(
                        egui::Color32::from_rgb(255, 255, 0),
                        format!("Pending scroll: {anchor:?}"),
                    );
                }

                ui.separator();

                ui.heading("Session");
                match &state.session {
                    Some(profile) => {
                        ui.label(format!("User: {}", profile.display_name));
                        ui.label(format!("Role: {}", profile.role.label()));
                        ui.label(format!("Scan count: {}", profile.scan_count));
                    }
                    None => {
                        ui.label("Anonymous");
                    }
                }
                ui.label(format!(
                    "Dropdown: open={} hover={} gen={}",
                    state.dropdown_open, state.dropdown_hover, state.dropdown_timer_gen
                ));
                if state.auth_modal.open {
                    let status = if state.auth_modal.busy {
                        "Auth modal: busy"
                    } else {
                        "Auth modal: open"
                    };
                    ui.colored_label(egui::Color32::from_rgb(255, 165, 0), status);
                }

                ui.separator();

                ui.heading("Scans");
                ui.label(format!("Ledger rows: {}", state.scans.len()));
                if let Some(id) = &state.expanded_scan {
                    ui.label(format!("Expanded: {id}"));
                }
                if state.capture.phase == CapturePhase::Scanning {
                    ui.colored_label(egui::Color32::from_rgb(255, 255, 0), "Capture: scanning");
                } else {
                    ui.label("Capture: idle");
                }

                ui.separator();

                ui.heading("Commerce");
                match state.checkout {
                    Some(intent) => {
                        let cadence = if intent.yearly { "yearly" } else { "monthly" };
                        ui.colored_label(
                            egui::Color32::from_rgb(0, 255, 0),
                            format!("Intent: {} ({})", intent.plan.label(), cadence),
                        );
                    }
                    None => {
                        ui.label("Intent: none");
                    }
                }

                ui.separator();

                ui.heading("Preferences");
                ui.label(format!(
                    "{} / {}",
                    state.prefs.language.tag(),
                    state.prefs.currency.code()
                ));

                ui.separator();
                ui.label("Press Ctrl+D to toggle this overlay");
            });
        });
}

/// Check if debug overlay should be shown
///
/// Controlled by:
/// 1. Feature flag: `cfg!(feature = "debug-mode")`
/// 2. Environment variable: `SAMA_DEBUG_UI=1` (read once at startup)
/// 3. Runtime toggle via state (Ctrl+D)
pub fn should_show_overlay(state: &AppState) -> bool {
    state.debug_overlay_visible || crate::debug::is_debug_mode()
}
