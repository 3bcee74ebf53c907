//! # Capture Tasks
//!
//! Background task for the simulated damage analysis.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, CapturePhase};
use crate::utils::runtime::TOKIO_RT;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Run one analysis pass on the analyzer collaborator.
///
/// Internal task function - use [`crate::app::App::handle_scan_start`] instead.
pub(crate) fn run_analysis(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    // Flip to scanning and grab the analyzer with minimal lock duration
    let analyzer = {
        let mut state = state.write();

        // Skip if a pass is already in flight (prevents task pileup)
        if state.capture.phase == CapturePhase::Scanning {
            return;
        }

        state.capture.phase = CapturePhase::Scanning;
        Arc::clone(&state.analyzer)
    }; // Lock released here

    tracing::info!("Capture analysis started");

    TOKIO_RT.spawn(async move {
        let result = analyzer.analyze().await;
        let _ = event_tx.send(AppEvent::CaptureAnalyzed(result)).await;
    });
}
