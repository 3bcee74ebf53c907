//! # Event Handlers
//!
//! Handler functions for GUI actions, organized by concern.
//!
//! Handlers are free functions over `Arc<RwLock<AppState>>` so they can be
//! exercised in tests without constructing an [`crate::app::App`]. The `App`
//! delegates to them from its `handle_*` methods.

pub mod auth;
pub mod checkout;
pub mod dropdown;
pub mod navigation;
pub mod prefs;
pub mod scans;
