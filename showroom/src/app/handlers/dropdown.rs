//! # Profile Dropdown Handlers
//!
//! Hover-intent wiring for the nav bar's profile dropdown. Entering opens the
//! menu immediately; leaving starts a 300 ms grace timer so the pointer can
//! cross the gap between the chip and the menu. Re-entry cancels the pending
//! close by bumping the timer generation.

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::app::tasks;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// React to the pointer entering or leaving the chip/dropdown region.
///
/// The nav bar reports the combined hover status every frame; this handler
/// acts only on edges, so a held hover neither reopens the menu nor
/// reschedules the close timer.
///
/// Internal handler function - use [`crate::app::App::handle_dropdown_hover`] instead.
pub(crate) fn hover_changed(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, hovered: bool) {
    let mut state = state.write();

    if state.dropdown_hover == hovered {
        return;
    }
    state.dropdown_hover = hovered;

    // The dropdown only exists while signed in.
    if state.session.is_none() {
        return;
    }

    state.dropdown_timer_gen = state.dropdown_timer_gen.wrapping_add(1);

    if hovered {
        state.dropdown_open = true;
    } else {
        let generation = state.dropdown_timer_gen;
        drop(state);
        tasks::timers::schedule_dropdown_close(event_tx, generation);
    }
}

/// React to a click on the sign-in / profile chip.
///
/// Signed out this opens the sign-in modal; signed in it toggles the
/// dropdown, cancelling any pending close.
///
/// Internal handler function - use [`crate::app::App::handle_sign_in_clicked`] instead.
pub(crate) fn sign_in_clicked(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();

    if state.session.is_some() {
        state.dropdown_timer_gen = state.dropdown_timer_gen.wrapping_add(1);
        state.dropdown_open = !state.dropdown_open;
    } else {
        state.auth_modal.open = true;
    }
}
