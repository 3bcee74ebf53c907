//! # Debugging and Tracing Infrastructure
//!
//! Logging setup for the SAMA showroom. Provides file-based logging with
//! daily rotation plus a console layer for development runs.
//!
//! ## Usage
//!
//! ```rust,ignore
//! // Initialize at app startup, before any other operations
//! showroom::debug::init();
//!
//! // Log with structured fields anywhere afterwards
//! tracing::info!(screen = "dashboard", depth = 2, "Navigated");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `SAMA_LOG`: log level filter (e.g. `showroom=debug,info`)
//! - `SAMA_LOG_DIR`: log directory (default: `logs`)
//! - `SAMA_DEBUG_UI`: enable the in-UI debug overlay (1=on, 0=off)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init as init_logger;

/// Initialize the debugging system
///
/// Sets up file-based logging with daily rotation and structured output.
/// Call this at application startup, before any other operations.
pub fn init() {
    init_logger();
}

/// Check if debug mode is enabled via feature flag
pub fn is_debug_mode() -> bool {
    cfg!(feature = "debug-mode")
}

/// Check if profiling is enabled via feature flag
pub fn is_profile_mode() -> bool {
    cfg!(feature = "profile")
}
