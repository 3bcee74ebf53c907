//! # Application Core
//!
//! The orchestrator of the showroom GUI. [`App`] owns the shared state and
//! the event channel; the UI shell calls its `handle_*` methods for every
//! interaction and [`App::on_tick`] once per frame to drain events coming
//! back from background tasks.
//!
//! ## Architecture
//!
//! ```text
//!        ┌──────────── UI shell (egui) ────────────┐
//!        │  snapshot state, render, call handlers  │
//!        └───────┬──────────────────────▲──────────┘
//!                │ handle_* / on_tick   │ clone
//!        ┌───────▼──────────────────────┴──────────┐
//!        │   App { state, event_tx, event_rx }     │
//!        └───────┬──────────────────────▲──────────┘
//!                │ spawn                │ AppEvent
//!        ┌───────▼──────────────────────┴──────────┐
//!        │    Tokio runtime (timers, simulations)  │
//!        └─────────────────────────────────────────┘
//! ```
//!
//! `App::new()` spawns nothing, so the whole application core is
//! constructible and drivable from plain unit tests.

pub mod event_handler;
pub mod events;
pub mod handlers;
pub mod state;
pub mod tasks;

pub use events::AppEvent;
pub use state::{
    AppState, AuthModalState, CapturePhase, CaptureState, CheckoutIntent, PaidPlan, Screen,
    SectionAnchor,
};

use crate::prefs::Preferences;
use async_channel::{Receiver, Sender};
use parking_lot::RwLock;
use shared::{Currency, Language, UserRole};
use std::sync::Arc;

/// The application core: shared state plus the event channel.
pub struct App {
    /// Shared application state. The UI clones a snapshot each frame;
    /// handlers and events take short write locks.
    pub state: Arc<RwLock<AppState>>,
    event_rx: Receiver<AppEvent>,
    event_tx: Sender<AppEvent>,
}

impl App {
    /// Build the application core with seeded state and loaded preferences.
    ///
    /// Performs no spawning and touches nothing but the preference file.
    pub fn new() -> Self {
        let (event_tx, event_rx) = async_channel::unbounded();

        let mut state = AppState::default();
        state.prefs = Preferences::load();
        state.debug_overlay_visible = crate::debug::DebugConfig::from_env().show_debug_ui;
        tracing::info!(
            language = state.prefs.language.as_str(),
            currency = state.prefs.currency.code(),
            "Preferences loaded"
        );

        Self {
            state: Arc::new(RwLock::new(state)),
            event_rx,
            event_tx,
        }
    }

    /// Drain and apply all events queued by background tasks.
    ///
    /// Called once per frame by the shell, before state is snapshotted.
    pub fn on_tick(&mut self) {
        use event_handler::AppEventHandler;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event_impl(event);
        }
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    /// Navigate to a screen, subject to the auth and checkout gates.
    pub fn handle_navigate(&self, target: Screen) {
        handlers::navigation::navigate_to(Arc::clone(&self.state), target);
    }

    /// Step back through the history stack.
    pub fn handle_back(&self) {
        handlers::navigation::go_back(Arc::clone(&self.state));
    }

    /// Show the landing page and scroll to pricing once it has laid out.
    pub fn handle_navigate_to_pricing(&self) {
        handlers::navigation::navigate_to_pricing(Arc::clone(&self.state), self.event_tx.clone());
    }

    /// Sign-in / profile chip clicked.
    pub fn handle_sign_in_clicked(&self) {
        handlers::dropdown::sign_in_clicked(Arc::clone(&self.state));
    }

    /// Pointer entered or left the profile chip / dropdown region.
    pub fn handle_dropdown_hover(&self, hovered: bool) {
        handlers::dropdown::hover_changed(Arc::clone(&self.state), self.event_tx.clone(), hovered);
    }

    /// Submit the sign-in modal.
    pub fn handle_auth_submit(&self) {
        handlers::auth::submit(Arc::clone(&self.state), self.event_tx.clone());
    }

    /// Dismiss the sign-in modal.
    pub fn handle_auth_cancel(&self) {
        handlers::auth::close_modal(Arc::clone(&self.state));
    }

    /// Clear the session and return to the landing page.
    pub fn handle_sign_out(&self) {
        handlers::auth::sign_out(Arc::clone(&self.state));
    }

    /// Clear the session and reopen the sign-in modal.
    pub fn handle_switch_profile(&self) {
        handlers::auth::switch_profile(Arc::clone(&self.state));
    }

    /// Apply a plan change directly (free tier, or a consumed checkout).
    pub fn handle_plan_upgrade(&self, role: UserRole, yearly: bool) {
        handlers::auth::upgrade_plan(Arc::clone(&self.state), role, yearly);
    }

    /// Stage a paid plan and enter checkout.
    pub fn handle_checkout_start(&self, plan: PaidPlan, yearly: bool) {
        handlers::checkout::initiate(Arc::clone(&self.state), plan, yearly);
    }

    /// Complete the staged checkout.
    pub fn handle_checkout_complete(&self) {
        handlers::checkout::complete(Arc::clone(&self.state));
    }

    /// Abandon the staged checkout.
    pub fn handle_checkout_cancel(&self) {
        handlers::checkout::cancel(Arc::clone(&self.state));
    }

    /// Kick off a simulated capture pass.
    pub fn handle_scan_start(&self) {
        tasks::capture::run_analysis(Arc::clone(&self.state), self.event_tx.clone());
    }

    /// Delete a scan from the ledger.
    pub fn handle_scan_delete(&self, id: &str) {
        handlers::scans::delete_scan(Arc::clone(&self.state), id);
    }

    /// Open a scan's capture image in the browser.
    pub fn handle_scan_image_open(&self, id: &str) {
        handlers::scans::open_scan_image(Arc::clone(&self.state), id);
    }

    /// Expand or collapse a ledger row on the dashboard.
    pub fn handle_scan_toggle(&self, id: &str) {
        handlers::scans::toggle_expanded(Arc::clone(&self.state), id);
    }

    /// Switch the display language.
    pub fn handle_language_change(&self, language: Language) {
        handlers::prefs::set_language(Arc::clone(&self.state), language);
    }

    /// Switch the pricing currency.
    pub fn handle_currency_change(&self, currency: Currency) {
        handlers::prefs::set_currency(Arc::clone(&self.state), currency);
    }

    /// Take the staged deferred-scroll target, if any.
    ///
    /// The landing page consumes this while rendering the frame after the
    /// scroll timer matures.
    pub fn take_pending_scroll(&self) -> Option<SectionAnchor> {
        self.state.write().pending_scroll.take()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::event_handler::AppEventHandler;
    use super::*;
    use shared::{AnalysisReport, CaptureResult, DamageLevel, UserProfile};
    use std::time::Duration;

    fn signed_in_app() -> App {
        let app = App::new();
        app.state.write().session = Some(UserProfile::demo(UserRole::Free));
        app
    }

    // Env-touching tests serialize on this so SAMA_PREFS_PATH cannot race.
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    // ========== App Construction Tests ==========

    #[test]
    fn test_app_starts_on_landing_with_seeded_ledger() {
        let app = App::new();
        let state = app.state.read();

        assert_eq!(state.current_screen, Screen::Landing);
        assert_eq!(state.history, vec![Screen::Landing]);
        assert!(state.session.is_none());
        assert!(state.checkout.is_none());
        assert!(!state.auth_modal.open);
        assert!(!state.dropdown_open);

        assert_eq!(state.scans.len(), 2);
        assert_eq!(state.scans[0].id, "SAMA-9921");
        assert_eq!(state.scans[1].id, "SAMA-9844");
        assert!(state.scans[0].timestamp > state.scans[1].timestamp);
    }

    #[test]
    fn test_seed_scan_details_match_the_demo_fleet() {
        let scans = AppState::seed_scans();

        assert_eq!(scans[0].vehicle_model, "Tesla Model 3");
        assert_eq!(scans[0].damage_level, DamageLevel::Low);
        assert!((scans[0].confidence - 0.98).abs() < f32::EPSILON);
        assert_eq!(scans[0].findings.len(), 2);

        assert_eq!(scans[1].vehicle_model, "Ford F-150");
        assert_eq!(scans[1].damage_level, DamageLevel::Medium);
        assert_eq!(scans[1].recommendations[0], "PDR (Paintless Dent Repair) recommended");
    }

    // ========== Navigation Tests ==========

    #[test]
    fn test_navigate_pushes_history() {
        let app = App::new();

        app.handle_navigate(Screen::Platform);
        app.handle_navigate(Screen::Api);

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Api);
        assert_eq!(state.history, vec![Screen::Landing, Screen::Platform, Screen::Api]);
    }

    #[test]
    fn test_duplicate_navigation_is_not_stacked() {
        let app = App::new();

        app.handle_navigate(Screen::Platform);
        app.handle_navigate(Screen::Platform);
        app.handle_navigate(Screen::Platform);

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Platform);
        assert_eq!(state.history, vec![Screen::Landing, Screen::Platform]);
    }

    #[test]
    fn test_go_back_returns_to_previous_screen() {
        let app = App::new();

        app.handle_navigate(Screen::Platform);
        app.handle_navigate(Screen::Resources);
        app.handle_back();

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Platform);
        assert_eq!(state.history, vec![Screen::Landing, Screen::Platform]);
    }

    #[test]
    fn test_go_back_at_bottom_shows_landing_without_popping() {
        let app = App::new();

        app.handle_back();
        app.handle_back();

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Landing);
        assert_eq!(state.history, vec![Screen::Landing]);
    }

    #[test]
    fn test_history_is_never_empty() {
        let app = App::new();

        app.handle_navigate(Screen::Enterprise);
        for _ in 0..5 {
            app.handle_back();
        }

        let state = app.state.read();
        assert!(!state.history.is_empty());
        assert_eq!(state.history[0], Screen::Landing);
    }

    // ========== Auth Gating Tests ==========

    #[test]
    fn test_dashboard_requires_session() {
        let app = App::new();

        app.handle_navigate(Screen::Dashboard);

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Landing);
        assert_eq!(state.history, vec![Screen::Landing]);
        assert!(state.auth_modal.open);
    }

    #[test]
    fn test_capture_requires_session() {
        let app = App::new();

        app.handle_navigate(Screen::Capture);

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Landing);
        assert!(state.auth_modal.open);
    }

    #[test]
    fn test_gated_screens_open_once_signed_in() {
        let app = signed_in_app();

        app.handle_navigate(Screen::Dashboard);
        assert_eq!(app.state.read().current_screen, Screen::Dashboard);

        app.handle_navigate(Screen::Capture);
        assert_eq!(app.state.read().current_screen, Screen::Capture);
    }

    #[test]
    fn test_auth_success_installs_session_and_opens_dashboard() {
        let mut app = App::new();
        app.state.write().auth_modal.open = true;

        app.handle_event_impl(AppEvent::AuthResult(Ok(UserProfile::demo(UserRole::Free))));

        let state = app.state.read();
        assert!(state.session.is_some());
        assert!(!state.auth_modal.open);
        assert_eq!(state.current_screen, Screen::Dashboard);
        assert_eq!(state.history, vec![Screen::Landing, Screen::Dashboard]);
        assert!(state
            .pending_notifications
            .iter()
            .any(|(level, _)| level == "success"));
    }

    #[test]
    fn test_auth_failure_surfaces_in_modal() {
        let mut app = App::new();
        {
            let mut state = app.state.write();
            state.auth_modal.open = true;
            state.auth_modal.busy = true;
        }

        app.handle_event_impl(AppEvent::AuthResult(Err("identity service offline".to_string())));

        let state = app.state.read();
        assert!(state.session.is_none());
        assert!(state.auth_modal.open);
        assert!(!state.auth_modal.busy);
        assert_eq!(state.auth_modal.error.as_deref(), Some("identity service offline"));
        assert_eq!(state.current_screen, Screen::Landing);
    }

    #[test]
    fn test_auth_submit_rejects_malformed_email() {
        let app = App::new();
        {
            let mut state = app.state.write();
            state.auth_modal.open = true;
            state.auth_modal.email = "not-an-email".to_string();
            state.auth_modal.display_name = "Alex Carter".to_string();
        }

        app.handle_auth_submit();

        let state = app.state.read();
        assert!(!state.auth_modal.busy);
        assert!(state.auth_modal.error.is_some());
    }

    #[test]
    fn test_sign_out_clears_session_and_lands() {
        let app = signed_in_app();
        app.handle_navigate(Screen::Dashboard);

        app.handle_sign_out();

        let state = app.state.read();
        assert!(state.session.is_none());
        assert_eq!(state.current_screen, Screen::Landing);
        assert!(!state.dropdown_open);
    }

    #[test]
    fn test_switch_profile_reopens_the_modal() {
        let app = signed_in_app();

        app.handle_switch_profile();

        let state = app.state.read();
        assert!(state.session.is_none());
        assert_eq!(state.current_screen, Screen::Landing);
        assert!(state.auth_modal.open);
    }

    // ========== Scan Ledger Tests ==========

    fn capture_with(vehicle: Option<&str>) -> CaptureResult {
        CaptureResult {
            report: AnalysisReport {
                vehicle_model: vehicle.map(str::to_string),
                damage_level: Some(DamageLevel::Low),
                confidence: Some(0.97),
                findings: vec!["Scuffed door edge".to_string()],
            },
            image_url: "https://example.com/capture.jpg".to_string(),
        }
    }

    #[test]
    fn test_completed_scan_prepends_and_increments_count() {
        let mut app = signed_in_app();
        app.state.write().capture.phase = CapturePhase::Scanning;

        app.handle_event_impl(AppEvent::CaptureAnalyzed(Ok(capture_with(Some("Audi A4")))));

        let state = app.state.read();
        assert_eq!(state.scans.len(), 3);
        assert_eq!(state.scans[0].vehicle_model, "Audi A4");
        assert_eq!(state.scans[1].id, "SAMA-9921");
        assert_eq!(state.capture.phase, CapturePhase::Idle);
        assert_eq!(state.current_screen, Screen::Dashboard);
        let profile = state.session.as_ref().expect("session installed in test");
        assert_eq!(profile.scan_count, 1);
    }

    #[test]
    fn test_capture_fallbacks_fill_absent_report_fields() {
        let record = handlers::scans::record_from_capture(CaptureResult {
            report: AnalysisReport {
                vehicle_model: None,
                damage_level: None,
                confidence: None,
                findings: Vec::new(),
            },
            image_url: "https://example.com/capture.jpg".to_string(),
        });

        assert_eq!(record.vehicle_model, "Unknown Vehicle");
        assert_eq!(record.damage_level, DamageLevel::None);
        assert!((record.confidence - 0.95).abs() < f32::EPSILON);
        assert!(record.findings.is_empty());
        assert_eq!(
            record.recommendations,
            vec![
                "Follow up with certified inspector".to_string(),
                "Review insurance policy".to_string()
            ]
        );

        // Ids follow the SAMA-<four digits> scheme
        let digits = record.id.strip_prefix("SAMA-").expect("id prefix");
        assert_eq!(digits.len(), 4);
        assert!(digits.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_failed_scan_returns_to_idle_with_error_toast() {
        let mut app = signed_in_app();
        app.state.write().capture.phase = CapturePhase::Scanning;

        app.handle_event_impl(AppEvent::CaptureAnalyzed(Err("no vehicle in frame".to_string())));

        let state = app.state.read();
        assert_eq!(state.scans.len(), 2);
        assert_eq!(state.capture.phase, CapturePhase::Idle);
        assert!(state
            .pending_notifications
            .iter()
            .any(|(level, message)| level == "error" && message.contains("no vehicle in frame")));
        let profile = state.session.as_ref().expect("session installed in test");
        assert_eq!(profile.scan_count, 0);
    }

    #[test]
    fn test_delete_scan_removes_by_id_and_floors_count() {
        let app = signed_in_app();

        // Fresh session has never scanned; deleting a seed scan must not
        // push the counter below zero.
        app.handle_scan_delete("SAMA-9921");

        let state = app.state.read();
        assert_eq!(state.scans.len(), 1);
        assert_eq!(state.scans[0].id, "SAMA-9844");
        let profile = state.session.as_ref().expect("session installed in test");
        assert_eq!(profile.scan_count, 0);
    }

    #[test]
    fn test_delete_unknown_scan_is_idempotent_on_ledger() {
        let app = signed_in_app();
        {
            let mut state = app.state.write();
            if let Some(profile) = state.session.as_mut() {
                profile.scan_count = 2;
            }
        }

        app.handle_scan_delete("SAMA-0000");

        let state = app.state.read();
        assert_eq!(state.scans.len(), 2);
        // The count still decrements; it tracks delete actions, not matches.
        let profile = state.session.as_ref().expect("session installed in test");
        assert_eq!(profile.scan_count, 1);
    }

    #[test]
    fn test_delete_without_session_leaves_no_counter_to_floor() {
        let app = App::new();

        app.handle_scan_delete("SAMA-9844");

        let state = app.state.read();
        assert_eq!(state.scans.len(), 1);
        assert!(state.session.is_none());
    }

    // ========== Checkout Tests ==========

    #[test]
    fn test_initiate_checkout_stages_intent_and_navigates() {
        let app = App::new();

        app.handle_checkout_start(PaidPlan::Pro, false);

        let state = app.state.read();
        assert_eq!(
            state.checkout,
            Some(CheckoutIntent {
                plan: PaidPlan::Pro,
                yearly: false
            })
        );
        assert_eq!(state.current_screen, Screen::Checkout);
        assert_eq!(state.history.last(), Some(&Screen::Checkout));
    }

    #[test]
    fn test_checkout_screen_requires_staged_intent() {
        let app = App::new();

        app.handle_navigate(Screen::Checkout);

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Landing);
        assert_eq!(state.history, vec![Screen::Landing]);
    }

    #[test]
    fn test_complete_checkout_consumes_intent_once() {
        let app = App::new();
        app.handle_checkout_start(PaidPlan::Pro, false);

        app.handle_checkout_complete();

        {
            let state = app.state.read();
            assert!(state.checkout.is_none());
            assert_eq!(state.current_screen, Screen::Dashboard);
            let profile = state.session.as_ref().expect("upgrade synthesizes the demo profile");
            assert_eq!(profile.role, UserRole::Pro);
            assert_eq!(profile.id, "usr_1");
            assert_eq!(profile.scan_count, 0);
        }

        // A second completion has nothing to consume and changes nothing.
        app.handle_checkout_complete();
        let state = app.state.read();
        let profile = state.session.as_ref().expect("session from first completion");
        assert_eq!(profile.role, UserRole::Pro);
    }

    #[test]
    fn test_complete_checkout_preserves_existing_identity() {
        let app = App::new();
        {
            let mut state = app.state.write();
            let mut profile = UserProfile::demo(UserRole::Free);
            profile.email = "fleet-ops@eurofleet.example".to_string();
            profile.scan_count = 7;
            state.session = Some(profile);
        }

        app.handle_checkout_start(PaidPlan::Expert, true);
        app.handle_checkout_complete();

        let state = app.state.read();
        let profile = state.session.as_ref().expect("session preserved");
        assert_eq!(profile.role, UserRole::Expert);
        assert_eq!(profile.email, "fleet-ops@eurofleet.example");
        assert_eq!(profile.scan_count, 7);
    }

    #[test]
    fn test_cancel_checkout_clears_intent() {
        let app = App::new();
        app.handle_checkout_start(PaidPlan::Expert, false);

        app.handle_checkout_cancel();

        let state = app.state.read();
        assert!(state.checkout.is_none());
        assert_eq!(state.current_screen, Screen::Landing);
    }

    #[test]
    fn test_free_plan_upgrades_without_checkout() {
        let app = App::new();

        app.handle_plan_upgrade(UserRole::Free, false);

        let state = app.state.read();
        assert!(state.checkout.is_none());
        assert_eq!(state.current_screen, Screen::Dashboard);
        let profile = state.session.as_ref().expect("demo profile synthesized");
        assert_eq!(profile.role, UserRole::Free);
        assert_eq!(profile.display_name, "Alex Carter");
    }

    // ========== Preference Tests ==========

    #[test]
    fn test_arabic_switch_flips_direction_and_persists() {
        let _guard = ENV_LOCK.lock().expect("env lock");
        let path = std::env::temp_dir().join(format!("sama-prefs-{}.json", uuid::Uuid::new_v4()));
        std::env::set_var(crate::prefs::PREFS_PATH_ENV, &path);

        let app = App::new();
        app.handle_language_change(Language::Arabic);

        {
            let state = app.state.read();
            assert_eq!(state.prefs.language, Language::Arabic);
            assert_eq!(state.prefs.language.tag(), "ar");
            assert_eq!(
                state.prefs.language.direction(),
                shared::TextDirection::RightToLeft
            );
        }

        let reloaded = Preferences::load_from_file(&path);
        assert_eq!(reloaded.language, Language::Arabic);

        std::env::remove_var(crate::prefs::PREFS_PATH_ENV);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_currency_switch_updates_pricing_state() {
        let _guard = ENV_LOCK.lock().expect("env lock");
        let path = std::env::temp_dir().join(format!("sama-prefs-{}.json", uuid::Uuid::new_v4()));
        std::env::set_var(crate::prefs::PREFS_PATH_ENV, &path);

        let app = App::new();
        app.handle_currency_change(Currency::Aed);

        {
            let state = app.state.read();
            assert_eq!(state.prefs.currency, Currency::Aed);
            // The pricing cards format through the same Currency value.
            assert_eq!(state.prefs.currency.format_amount(29.0), "AED 106");
        }

        std::env::remove_var(crate::prefs::PREFS_PATH_ENV);
        let _ = std::fs::remove_file(&path);
    }

    // ========== Timer Tests ==========

    #[test]
    fn test_dropdown_needs_a_session() {
        let app = App::new();

        app.handle_dropdown_hover(true);

        assert!(!app.state.read().dropdown_open);
    }

    #[test]
    fn test_stale_dropdown_generation_is_ignored() {
        let mut app = signed_in_app();

        app.handle_dropdown_hover(true);
        let generation = app.state.read().dropdown_timer_gen;

        // A timer scheduled before the last re-entry carries an old generation.
        app.handle_event_impl(AppEvent::DropdownCloseElapsed(generation.wrapping_sub(1)));
        assert!(app.state.read().dropdown_open);

        // The current generation closes.
        app.handle_event_impl(AppEvent::DropdownCloseElapsed(generation));
        assert!(!app.state.read().dropdown_open);
    }

    #[tokio::test]
    async fn test_dropdown_closes_after_grace_period() {
        let mut app = signed_in_app();

        app.handle_dropdown_hover(true);
        assert!(app.state.read().dropdown_open);

        app.handle_dropdown_hover(false);
        tokio::time::sleep(Duration::from_millis(450)).await;
        app.on_tick();

        assert!(!app.state.read().dropdown_open);
    }

    #[tokio::test]
    async fn test_dropdown_reentry_cancels_pending_close() {
        let mut app = signed_in_app();

        app.handle_dropdown_hover(true);
        app.handle_dropdown_hover(false);
        tokio::time::sleep(Duration::from_millis(100)).await;

        // Back over the menu before the grace period matures.
        app.handle_dropdown_hover(true);
        tokio::time::sleep(Duration::from_millis(450)).await;
        app.on_tick();

        assert!(app.state.read().dropdown_open);
    }

    #[tokio::test]
    async fn test_pricing_navigation_stages_deferred_scroll() {
        let mut app = App::new();
        app.handle_navigate(Screen::Api);

        app.handle_navigate_to_pricing();
        assert_eq!(app.state.read().current_screen, Screen::Landing);
        assert!(app.state.read().pending_scroll.is_none());

        tokio::time::sleep(Duration::from_millis(250)).await;
        app.on_tick();

        assert_eq!(app.state.read().pending_scroll, Some(SectionAnchor::Pricing));
        assert_eq!(app.take_pending_scroll(), Some(SectionAnchor::Pricing));
        assert!(app.state.read().pending_scroll.is_none());
    }

    // ========== End-to-End Service Tests ==========

    #[tokio::test]
    async fn test_sign_in_round_trip_through_the_provider() {
        let mut app = App::new();
        {
            let mut state = app.state.write();
            state.auth_modal.open = true;
            state.auth_modal.email = "demo@sama.ai".to_string();
            state.auth_modal.display_name = "Alex Carter".to_string();
        }

        app.handle_auth_submit();
        assert!(app.state.read().auth_modal.busy);

        // The demo provider answers after a short artificial delay.
        let mut signed_in = false;
        for _ in 0..50 {
            tokio::time::sleep(Duration::from_millis(100)).await;
            app.on_tick();
            if app.state.read().session.is_some() {
                signed_in = true;
                break;
            }
        }

        assert!(signed_in, "provider should answer well within five seconds");
        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Dashboard);
        let profile = state.session.as_ref().expect("session installed");
        assert_eq!(profile.email, "demo@sama.ai");
        assert_eq!(profile.role, UserRole::Free);
    }
}
