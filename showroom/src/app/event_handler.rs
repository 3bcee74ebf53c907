//! # Event Handler
//!
//! Applies [`AppEvent`]s to state on the main thread. Events arrive from
//! background tasks through the app's channel and are drained once per frame
//! by [`App::on_tick`](crate::app::App::on_tick).
//!
//! Write locks are held only long enough to apply the mutation; follow-up
//! navigation re-enters the navigation handler with the lock released.

use crate::app::events::AppEvent;
use crate::app::state::{AuthModalState, CapturePhase, Screen, SectionAnchor};
use crate::app::{handlers, App};
use shared::{CaptureResult, UserProfile};
use std::sync::Arc;

/// Event dispatch for [`App`].
pub trait AppEventHandler {
    /// Apply one event to application state.
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::AuthResult(result) => self.handle_auth_result(result),
            AppEvent::CaptureAnalyzed(result) => self.handle_capture_analyzed(result),
            AppEvent::DropdownCloseElapsed(generation) => {
                self.handle_dropdown_close_elapsed(generation)
            }
            AppEvent::ScrollToSection(anchor) => self.handle_scroll_to_section(anchor),
        }
    }
}

impl App {
    /// The identity provider answered: install the session and head to the
    /// dashboard, or surface the error in the modal.
    fn handle_auth_result(&mut self, result: Result<UserProfile, String>) {
        match result {
            Ok(profile) => {
                let display_name = profile.display_name.clone();
                {
                    let mut state = self.state.write();
                    state.session = Some(profile);
                    state.auth_modal = AuthModalState::default();
                    state.pending_notifications.push((
                        "success".to_string(),
                        format!("Signed in as {}", display_name),
                    ));
                } // Lock released here

                // The gate passes now that a session is installed.
                handlers::navigation::navigate_to(Arc::clone(&self.state), Screen::Dashboard);
            }
            Err(message) => {
                tracing::warn!(error = %message, "Sign-in failed");
                let mut state = self.state.write();
                state.auth_modal.busy = false;
                state.auth_modal.error = Some(message);
            }
        }
    }

    /// The analyzer finished: ledger the scan and show the dashboard, or
    /// toast the failure.
    fn handle_capture_analyzed(&mut self, result: Result<CaptureResult, String>) {
        match result {
            Ok(capture) => {
                let record = handlers::scans::record_from_capture(capture);
                let id = record.id.clone();
                {
                    let mut state = self.state.write();
                    state.capture.phase = CapturePhase::Idle;
                    state.scans.insert(0, record);
                    if let Some(profile) = state.session.as_mut() {
                        profile.scan_count += 1;
                    }
                    state
                        .pending_notifications
                        .push(("success".to_string(), format!("Scan {} complete", id)));
                } // Lock released here

                tracing::info!(id, "Scan recorded");
                handlers::navigation::navigate_to(Arc::clone(&self.state), Screen::Dashboard);
            }
            Err(message) => {
                tracing::warn!(error = %message, "Capture analysis failed");
                let mut state = self.state.write();
                state.capture.phase = CapturePhase::Idle;
                state
                    .pending_notifications
                    .push(("error".to_string(), format!("Scan failed: {}", message)));
            }
        }
    }

    /// A dropdown close timer matured. Only the latest generation may close
    /// the menu; anything older was cancelled by re-entry.
    fn handle_dropdown_close_elapsed(&mut self, generation: u64) {
        let mut state = self.state.write();
        if state.dropdown_timer_gen == generation {
            state.dropdown_open = false;
        } else {
            tracing::debug!(generation, current = state.dropdown_timer_gen, "Stale dropdown timer ignored");
        }
    }

    /// A deferred scroll matured: stage it for the landing page to consume.
    fn handle_scroll_to_section(&mut self, anchor: SectionAnchor) {
        self.state.write().pending_scroll = Some(anchor);
    }
}
