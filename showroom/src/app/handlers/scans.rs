//! # Scan Ledger Handlers
//!
//! The scan ledger is a newest-first `Vec<ScanRecord>`: completed captures
//! prepend, deletion removes by id. The session's scan count tracks the
//! ledger loosely; deletion floors it at zero because the two seed scans
//! predate any session.

use crate::app::state::AppState;
use parking_lot::RwLock;
use rand::Rng;
use shared::{CaptureResult, DamageLevel, ScanRecord, ScanStatus};
use std::sync::Arc;

/// Build a ledger record from an analysis pass.
///
/// Absent report fields get fixed fallbacks: `"Unknown Vehicle"`, damage
/// `None`, confidence `0.95`. Recommendations are the standard pair the
/// product attaches to every fresh scan.
pub(crate) fn record_from_capture(capture: CaptureResult) -> ScanRecord {
    let report = capture.report;
    ScanRecord {
        id: format!("SAMA-{}", rand::rng().random_range(1000..10000)),
        timestamp: chrono::Utc::now(),
        vehicle_model: report
            .vehicle_model
            .unwrap_or_else(|| "Unknown Vehicle".to_string()),
        damage_level: report.damage_level.unwrap_or(DamageLevel::None),
        status: ScanStatus::Ready,
        confidence: report.confidence.unwrap_or(0.95),
        image_url: Some(capture.image_url),
        findings: report.findings,
        recommendations: vec![
            "Follow up with certified inspector".to_string(),
            "Review insurance policy".to_string(),
        ],
    }
}

/// Remove a scan by id and decrement the session's scan count.
///
/// The count decrements (floored at zero) whenever a session exists, even if
/// the id did not match; deleting a seed scan that predates the session must
/// not underflow the counter.
///
/// Internal handler function - use [`crate::app::App::handle_scan_delete`] instead.
pub(crate) fn delete_scan(state: Arc<RwLock<AppState>>, id: &str) {
    let mut state = state.write();

    if let Some(pos) = state.scans.iter().position(|s| s.id == id) {
        state.scans.remove(pos);
        tracing::info!(id, remaining = state.scans.len(), "Scan deleted");
    } else {
        tracing::warn!(id, "Delete requested for unknown scan");
    }

    if state.expanded_scan.as_deref() == Some(id) {
        state.expanded_scan = None;
    }

    if let Some(profile) = state.session.as_mut() {
        profile.scan_count = profile.scan_count.saturating_sub(1);
    }
}

/// Open a scan's capture image in the system browser.
///
/// Internal handler function - use [`crate::app::App::handle_scan_image_open`] instead.
pub(crate) fn open_scan_image(state: Arc<RwLock<AppState>>, id: &str) {
    let url = {
        let state = state.read();
        state
            .scans
            .iter()
            .find(|s| s.id == id)
            .and_then(|s| s.image_url.clone())
    }; // Lock released here

    match url {
        Some(url) => {
            if let Err(e) = open::that(&url) {
                tracing::warn!(id, error = %e, "Failed to open capture image");
            }
        }
        None => tracing::warn!(id, "Scan has no capture image"),
    }
}

/// Toggle the expanded ledger row on the dashboard.
///
/// Internal handler function - use [`crate::app::App::handle_scan_toggle`] instead.
pub(crate) fn toggle_expanded(state: Arc<RwLock<AppState>>, id: &str) {
    let mut state = state.write();
    if state.expanded_scan.as_deref() == Some(id) {
        state.expanded_scan = None;
    } else {
        state.expanded_scan = Some(id.to_string());
    }
}
