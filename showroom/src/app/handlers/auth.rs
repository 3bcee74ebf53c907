//! # Session Handlers
//!
//! The sign-in modal, the simulated provider round-trip, sign-out and plan
//! changes. The session itself is just `Option<UserProfile>` in state; these
//! handlers are the only code that installs or clears it.

use crate::app::events::AppEvent;
use crate::app::handlers::navigation;
use crate::app::state::{AppState, AuthModalState, Screen};
use crate::utils::runtime::TOKIO_RT;
use crate::utils::validation;
use async_channel::Sender;
use parking_lot::RwLock;
use shared::{UserProfile, UserRole};
use std::sync::Arc;

/// Close the sign-in modal, discarding fields and any error.
///
/// Internal handler function - use [`crate::app::App::handle_auth_cancel`] instead.
pub(crate) fn close_modal(state: Arc<RwLock<AppState>>) {
    state.write().auth_modal = AuthModalState::default();
}

/// Validate the modal fields and run the identity provider.
///
/// Validation failures surface in the modal without a provider round-trip.
///
/// Internal handler function - use [`crate::app::App::handle_auth_submit`] instead.
pub(crate) fn submit(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) {
    let (email, display_name, provider) = {
        let mut state = state.write();

        if state.auth_modal.busy {
            return;
        }

        let email = state.auth_modal.email.trim().to_string();
        let display_name = state.auth_modal.display_name.trim().to_string();

        let check = validation::validate_email(&email);
        if !check.is_valid {
            state.auth_modal.error = check.error;
            return;
        }
        let check = validation::validate_display_name(&display_name);
        if !check.is_valid {
            state.auth_modal.error = check.error;
            return;
        }

        state.auth_modal.error = None;
        state.auth_modal.busy = true;
        (email, display_name, Arc::clone(&state.auth_provider))
    }; // Lock released here

    tracing::info!("Sign-in submitted");

    TOKIO_RT.spawn(async move {
        let result = provider.authenticate(email, display_name).await;
        let _ = event_tx.send(AppEvent::AuthResult(result)).await;
    });
}

/// Clear the session and return to the landing page.
///
/// Internal handler function - use [`crate::app::App::handle_sign_out`] instead.
pub(crate) fn sign_out(state: Arc<RwLock<AppState>>) {
    {
        let mut state = state.write();
        state.session = None;
        state.dropdown_open = false;
        state.dropdown_timer_gen = state.dropdown_timer_gen.wrapping_add(1);
        tracing::info!("Signed out");
    }
    navigation::navigate_to(state, Screen::Landing);
}

/// Clear the session and immediately reopen the sign-in modal.
///
/// Internal handler function - use [`crate::app::App::handle_switch_profile`] instead.
pub(crate) fn switch_profile(state: Arc<RwLock<AppState>>) {
    {
        let mut state = state.write();
        state.session = None;
        state.dropdown_open = false;
        state.dropdown_timer_gen = state.dropdown_timer_gen.wrapping_add(1);
        tracing::info!("Switching profile");
    }
    navigation::navigate_to(Arc::clone(&state), Screen::Landing);
    state.write().auth_modal.open = true;
}

/// Change the session's plan in place, then show the dashboard.
///
/// Identity and scan count are preserved. Without a session (the free-plan
/// button on the pricing cards works signed out) the canonical demo profile
/// is synthesized with the chosen role.
///
/// Internal handler function - use [`crate::app::App::handle_plan_upgrade`] instead.
pub(crate) fn upgrade_plan(state: Arc<RwLock<AppState>>, role: UserRole, yearly: bool) {
    {
        let mut state = state.write();
        match state.session.as_mut() {
            Some(profile) => profile.role = role,
            None => state.session = Some(UserProfile::demo(role)),
        }
        tracing::info!(role = role.as_str(), yearly, "Plan changed");
    }
    navigation::navigate_to(state, Screen::Dashboard);
}
