//! # Preference Handlers
//!
//! Language and currency changes: update state, persist the pair, log the
//! transition. Persistence failures are tolerated; the in-memory value is
//! already live.

use crate::app::state::AppState;
use parking_lot::RwLock;
use shared::{Currency, Language};
use std::sync::Arc;

/// Change the display language.
///
/// Internal handler function - use [`crate::app::App::handle_language_change`] instead.
pub(crate) fn set_language(state: Arc<RwLock<AppState>>, language: Language) {
    let prefs = {
        let mut state = state.write();
        state.prefs.language = language;
        state.prefs
    }; // Lock released here

    tracing::info!(
        language = language.as_str(),
        tag = language.tag(),
        direction = ?language.direction(),
        "Language changed"
    );

    if let Err(e) = prefs.save() {
        tracing::warn!(error = %e, "Failed to persist preferences");
    }
}

/// Change the pricing currency.
///
/// Internal handler function - use [`crate::app::App::handle_currency_change`] instead.
pub(crate) fn set_currency(state: Arc<RwLock<AppState>>, currency: Currency) {
    let prefs = {
        let mut state = state.write();
        state.prefs.currency = currency;
        state.prefs
    }; // Lock released here

    tracing::info!(currency = currency.code(), "Currency changed");

    if let Err(e) = prefs.save() {
        tracing::warn!(error = %e, "Failed to persist preferences");
    }
}
