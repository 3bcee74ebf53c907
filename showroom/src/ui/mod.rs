//! # UI Rendering Framework
//!
//! Immediate-mode rendering on egui. The shell snapshots state once per
//! frame and routes to one screen; widgets are free `render` functions that
//! read the snapshot and call back into [`crate::app::App`] handlers.
//!
//! ## Modules
//!
//! - **[`shell`]**: the eframe application (chrome, routing, toasts)
//! - **[`screens`]**: one module per screen
//! - **[`widgets`]**: nav bar, footer, back control, modal, pricing cards
//! - **[`theme`]**: SAMA palette and egui visuals
//! - **[`i18n`]**: navigation strings for the eight supported languages
//! - **[`debug_overlay`]**: live state window, Ctrl+D

pub mod debug_overlay;
pub mod i18n;
pub mod screens;
pub mod shell;
pub mod theme;
pub mod widgets;

pub use shell::Shell;
