//! # Navigation Handlers
//!
//! Screen transitions, the history stack and the auth gate.
//!
//! Every view change in the application funnels through [`navigate_to`], so
//! the history invariants hold globally: the stack is never empty, its bottom
//! entry is the landing page, and the same screen is never stacked twice in a
//! row.

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Screen, SectionAnchor};
use crate::app::tasks;
use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

/// Navigate to `target`, enforcing the auth and checkout gates.
///
/// Internal handler function - use [`crate::app::App::handle_navigate`] instead.
pub(crate) fn navigate_to(state: Arc<RwLock<AppState>>, target: Screen) {
    let mut state = state.write();

    if AppState::requires_auth(target) && !state.is_authenticated() {
        tracing::info!(
            "Access denied: {} requires a session, opening the sign-in modal",
            target.title()
        );
        state.auth_modal.open = true;
        return;
    }

    // Checkout is only reachable through a staged plan purchase.
    if target == Screen::Checkout && state.checkout.is_none() {
        tracing::warn!("Ignoring navigation to checkout: no plan staged");
        return;
    }

    state.current_screen = target;
    if state.history.last() != Some(&target) {
        state.history.push(target);
    }

    tracing::debug!(
        screen = target.title(),
        depth = state.history.len(),
        "Navigated"
    );
}

/// Step back through the history stack.
///
/// At the bottom of the stack this returns to the landing page without
/// touching the stack itself.
///
/// Internal handler function - use [`crate::app::App::handle_back`] instead.
pub(crate) fn go_back(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();

    if state.history.len() <= 1 {
        state.current_screen = Screen::Landing;
        tracing::debug!("Back at history bottom, showing landing");
        return;
    }

    state.history.pop();
    if let Some(&top) = state.history.last() {
        state.current_screen = top;
        tracing::debug!(
            screen = top.title(),
            depth = state.history.len(),
            "Navigated back"
        );
    }
}

/// Navigate to the landing page and stage a deferred scroll to pricing.
///
/// Internal handler function - use [`crate::app::App::handle_navigate_to_pricing`] instead.
pub(crate) fn navigate_to_pricing(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    navigate_to(state, Screen::Landing);
    tasks::timers::schedule_scroll(event_tx, SectionAnchor::Pricing);
}
