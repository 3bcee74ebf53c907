//! # Reusable UI Widgets
//!
//! Common widgets used across screens.

pub mod auth_modal;
pub mod back_button;
pub mod footer;
pub mod forms;
pub mod nav_bar;
pub mod notifications;
pub mod pricing;
pub mod scan_card;
