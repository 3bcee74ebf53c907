//! # Application State
//!
//! All state for the showroom lives here, behind the `Arc<RwLock<AppState>>`
//! owned by [`crate::app::App`]. The UI clones a snapshot once per frame;
//! handlers take short write locks to mutate.

use crate::core::service::{AuthProvider, DamageAnalyzer};
use crate::prefs::Preferences;
use crate::services::analyzer::SimulatedAnalyzer;
use crate::services::auth::DemoAuthProvider;
use chrono::Utc;
use shared::{DamageLevel, ScanRecord, ScanStatus, UserProfile, UserRole};
use std::sync::Arc;

/// The nine screens of the showroom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Marketing landing page: hero, sponsor strip, pricing, tech section.
    Landing,
    /// Fleet overview with the scan ledger. Requires a session.
    Dashboard,
    /// Simulated capture experience. Requires a session.
    Capture,
    /// Marketing: the capture platform.
    Platform,
    /// Marketing: enterprise offering.
    Enterprise,
    /// Marketing: the core analysis API.
    Api,
    /// Marketing: guides and documentation.
    Resources,
    /// Marketing: community hub.
    Community,
    /// Checkout overlay for a staged plan purchase. Suppresses the chrome.
    Checkout,
}

impl Screen {
    /// All screens, in declaration order.
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Landing,
            Screen::Dashboard,
            Screen::Capture,
            Screen::Platform,
            Screen::Enterprise,
            Screen::Api,
            Screen::Resources,
            Screen::Community,
            Screen::Checkout,
        ]
    }

    /// Human-readable title, used for the window title and logging.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Landing => "Home",
            Screen::Dashboard => "Fleet Overview",
            Screen::Capture => "New Scan",
            Screen::Platform => "Platform",
            Screen::Enterprise => "Enterprise",
            Screen::Api => "API",
            Screen::Resources => "Resources",
            Screen::Community => "Community",
            Screen::Checkout => "Checkout",
        }
    }
}

/// Sections of the landing page that can be scrolled to on request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionAnchor {
    /// The pricing card section.
    Pricing,
}

/// The two purchasable tiers. The free tier upgrades directly without a
/// checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaidPlan {
    Pro,
    Expert,
}

impl PaidPlan {
    pub fn label(&self) -> &'static str {
        match self {
            PaidPlan::Pro => "Pro",
            PaidPlan::Expert => "Expert",
        }
    }

    /// The role granted when the purchase completes.
    pub fn role(&self) -> UserRole {
        match self {
            PaidPlan::Pro => UserRole::Pro,
            PaidPlan::Expert => UserRole::Expert,
        }
    }

    /// Demo list price in USD for the chosen billing cadence.
    pub fn price_usd(&self, yearly: bool) -> f64 {
        match (self, yearly) {
            (PaidPlan::Pro, false) => 29.0,
            (PaidPlan::Pro, true) => 290.0,
            (PaidPlan::Expert, false) => 99.0,
            (PaidPlan::Expert, true) => 990.0,
        }
    }
}

/// A staged plan purchase. Created by the pricing cards, consumed exactly
/// once by checkout completion, cleared on cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutIntent {
    pub plan: PaidPlan,
    pub yearly: bool,
}

/// Sign-in modal state.
#[derive(Debug, Clone, Default)]
pub struct AuthModalState {
    /// Whether the modal is visible.
    pub open: bool,
    /// Email input field.
    pub email: String,
    /// Display name input field.
    pub display_name: String,
    /// Validation or provider error shown under the fields.
    pub error: Option<String>,
    /// True while the provider call is in flight.
    pub busy: bool,
}

/// Capture screen phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CapturePhase {
    #[default]
    Idle,
    Scanning,
}

/// Capture screen state.
#[derive(Debug, Clone, Default)]
pub struct CaptureState {
    pub phase: CapturePhase,
}

/// Complete application state.
#[derive(Clone)]
pub struct AppState {
    // Navigation
    /// The screen currently shown.
    pub current_screen: Screen,
    /// Visited-screen stack for the floating back control. Never empty;
    /// the bottom entry is always the landing page.
    pub history: Vec<Screen>,
    /// Section staged for a deferred scroll on the landing page.
    pub pending_scroll: Option<SectionAnchor>,

    // Session
    /// The signed-in profile, if any. `None` means browsing anonymously.
    pub session: Option<UserProfile>,
    /// Sign-in modal.
    pub auth_modal: AuthModalState,
    /// Whether the profile dropdown in the nav bar is open.
    pub dropdown_open: bool,
    /// Whether the pointer was over the profile chip or dropdown last frame.
    pub dropdown_hover: bool,
    /// Generation counter for the dropdown close timer. Bumping it cancels
    /// any close that is still pending.
    pub dropdown_timer_gen: u64,

    // Scans
    /// The scan ledger, newest first.
    pub scans: Vec<ScanRecord>,
    /// Ledger row expanded on the dashboard, by scan id.
    pub expanded_scan: Option<String>,
    /// Capture screen state.
    pub capture: CaptureState,

    // Commerce
    /// Staged plan purchase, when a checkout is underway.
    pub checkout: Option<CheckoutIntent>,
    /// Yearly/monthly toggle on the pricing cards.
    pub billing_yearly: bool,

    // Preferences
    /// The persisted language/currency pair.
    pub prefs: Preferences,

    // UI plumbing
    /// Queued toast notifications as (level, message) pairs. Levels are
    /// "success", "error", "warning" or "info".
    pub pending_notifications: Vec<(String, String)>,
    /// Runtime toggle for the debug overlay (Ctrl+D).
    pub debug_overlay_visible: bool,

    // Collaborators
    /// Identity provider behind the sign-in modal.
    pub auth_provider: Arc<dyn AuthProvider>,
    /// Damage analysis behind the capture screen.
    pub analyzer: Arc<dyn DamageAnalyzer>,
}

impl AppState {
    /// Whether a session is installed.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Screens reachable only with a session.
    pub fn requires_auth(screen: Screen) -> bool {
        matches!(screen, Screen::Dashboard | Screen::Capture)
    }

    /// Whether the nav bar and footer are rendered around `screen`.
    pub fn shows_chrome(screen: Screen) -> bool {
        !matches!(screen, Screen::Checkout)
    }

    /// Whether the floating back control is rendered on `screen`.
    pub fn shows_back(screen: Screen) -> bool {
        !matches!(screen, Screen::Landing)
    }

    /// The two demo scans every fresh session starts with.
    pub fn seed_scans() -> Vec<ScanRecord> {
        vec![
            ScanRecord {
                id: "SAMA-9921".to_string(),
                timestamp: Utc::now() - chrono::Duration::days(2),
                vehicle_model: "Tesla Model 3".to_string(),
                damage_level: DamageLevel::Low,
                status: ScanStatus::Ready,
                confidence: 0.98,
                image_url: Some(
                    "https://images.unsplash.com/photo-1560958089-b8a1929cea89?auto=format&fit=crop&q=80&w=400"
                        .to_string(),
                ),
                findings: vec![
                    "Minor surface scuffing on rear bumper".to_string(),
                    "Paint transfer detected (Silver)".to_string(),
                ],
                recommendations: vec![
                    "Buffing and polish suggested".to_string(),
                    "Structural integrity unaffected".to_string(),
                ],
            },
            ScanRecord {
                id: "SAMA-9844".to_string(),
                timestamp: Utc::now() - chrono::Duration::days(4),
                vehicle_model: "Ford F-150".to_string(),
                damage_level: DamageLevel::Medium,
                status: ScanStatus::Ready,
                confidence: 0.92,
                image_url: Some(
                    "https://images.unsplash.com/photo-1583121274602-3e2820c69888?auto=format&fit=crop&q=80&w=400"
                        .to_string(),
                ),
                findings: vec![
                    "Dent detected in front left fender".to_string(),
                    "Misalignment of hood panel".to_string(),
                ],
                recommendations: vec![
                    "PDR (Paintless Dent Repair) recommended".to_string(),
                    "Check wheel alignment".to_string(),
                ],
            },
        ]
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_screen: Screen::Landing,
            history: vec![Screen::Landing],
            pending_scroll: None,
            session: None,
            auth_modal: AuthModalState::default(),
            dropdown_open: false,
            dropdown_hover: false,
            dropdown_timer_gen: 0,
            scans: Self::seed_scans(),
            expanded_scan: None,
            capture: CaptureState::default(),
            checkout: None,
            billing_yearly: false,
            prefs: Preferences::default(),
            pending_notifications: Vec::new(),
            debug_overlay_visible: false,
            auth_provider: Arc::new(DemoAuthProvider::new()),
            analyzer: Arc::new(SimulatedAnalyzer::new()),
        }
    }
}
