//! # Checkout Handlers
//!
//! The checkout intent is consume-once: staged by the pricing cards, applied
//! exactly once on completion, cleared on cancel. The checkout screen itself
//! is only reachable while an intent is staged (see the gate in
//! [`crate::app::handlers::navigation::navigate_to`]).

use crate::app::handlers::{auth, navigation};
use crate::app::state::{AppState, CheckoutIntent, PaidPlan, Screen};
use parking_lot::RwLock;
use std::sync::Arc;

/// Stage a plan purchase and enter the checkout overlay.
///
/// Internal handler function - use [`crate::app::App::handle_checkout_start`] instead.
pub(crate) fn initiate(state: Arc<RwLock<AppState>>, plan: PaidPlan, yearly: bool) {
    {
        let mut state = state.write();
        state.checkout = Some(CheckoutIntent { plan, yearly });
        tracing::info!(plan = plan.label(), yearly, "Checkout started");
    }
    navigation::navigate_to(state, Screen::Checkout);
}

/// Consume the staged intent and apply the purchase.
///
/// Internal handler function - use [`crate::app::App::handle_checkout_complete`] instead.
pub(crate) fn complete(state: Arc<RwLock<AppState>>) {
    let intent = state.write().checkout.take();

    match intent {
        Some(intent) => {
            tracing::info!(plan = intent.plan.label(), yearly = intent.yearly, "Checkout completed");
            auth::upgrade_plan(Arc::clone(&state), intent.plan.role(), intent.yearly);
            state.write().pending_notifications.push((
                "success".to_string(),
                format!("Welcome to SAMA {}", intent.plan.label()),
            ));
        }
        None => tracing::warn!("Checkout completion with no staged plan"),
    }
}

/// Abandon the checkout: clear the intent and return to the landing page.
///
/// Internal handler function - use [`crate::app::App::handle_checkout_cancel`] instead.
pub(crate) fn cancel(state: Arc<RwLock<AppState>>) {
    {
        let mut state = state.write();
        if state.checkout.take().is_some() {
            tracing::info!("Checkout cancelled");
        }
    }
    navigation::navigate_to(state, Screen::Landing);
}
