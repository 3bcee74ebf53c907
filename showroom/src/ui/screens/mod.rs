//! # Screen Modules
//!
//! Each screen module contains the rendering logic for one screen. Every
//! module exposes a `render(ui, state, app)` function; the shell picks the
//! module from [`crate::app::Screen`] and wraps it in the scroll area.
//!
//! ## Screen Organization
//!
//! - **[`landing`]**: hero, sponsor strip, pricing, and capture-tech sections
//! - **[`dashboard`]**: fleet overview with the scan ledger table
//! - **[`capture`]**: simulated scan flow (idle target, scanning state)
//! - **[`checkout`]**: order summary for the staged plan
//! - **[`platform`]**, **[`enterprise`]**, **[`api`]**, **[`resources`]**,
//!   **[`community`]**: marketing pages

pub mod api;
pub mod capture;
pub mod checkout;
pub mod community;
pub mod dashboard;
pub mod enterprise;
pub mod landing;
pub mod platform;
pub mod resources;
