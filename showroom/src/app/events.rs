//! # Application Events
//!
//! Events sent from background tasks to the main thread.
//!
//! The UI thread never blocks: anything that waits (the simulated sign-in,
//! the analysis delay, the two UI timers) runs on the shared Tokio runtime
//! and reports back through the unbounded event channel. `App::on_tick()`
//! drains the channel once per frame and applies each event to state, so all
//! mutation stays on the main thread.
//!
//! ## Event Flow
//!
//! ```text
//! UI interaction ──► handler ──► spawn task ──► sleep / compute
//!                                                     │
//! App::on_tick() ◄── event channel ◄── AppEvent ◄─────┘
//! ```

use crate::app::state::SectionAnchor;
use shared::{CaptureResult, UserProfile};

/// Events processed by [`crate::app::App`] on the main thread.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The identity provider answered a sign-in request.
    AuthResult(Result<UserProfile, String>),

    /// The damage analyzer finished a capture pass.
    CaptureAnalyzed(Result<CaptureResult, String>),

    /// The dropdown close delay elapsed. Carries the timer generation the
    /// delay was scheduled under; stale generations are ignored.
    DropdownCloseElapsed(u64),

    /// A deferred scroll request matured and should be staged for the
    /// landing page to consume.
    ScrollToSection(SectionAnchor),
}
