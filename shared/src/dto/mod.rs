//! # Domain Data Types
//!
//! This module contains the data structures describing scans, users, and
//! interface preferences.
//!
//! ## Module Organization
//!
//! - [`scan`] - Scan records, damage levels, and simulated analysis payloads
//! - [`profile`] - User profiles and license roles
//! - [`locale`] - Interface languages and display currencies
//!
//! ## Serialization Format
//!
//! All types use `serde_json` for JSON serialization:
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Enums**: Serialize to their display strings (`"Low"`, `"PRO"`,
//!   `"English"`, `"USD"`) so persisted values match what the UI shows
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example
//!
//! A persisted preference file:
//!
//! ```text
//! {
//!   "language": "Arabic",
//!   "currency": "AED"
//! }
//! ```

pub mod locale;
pub mod profile;
pub mod scan;

pub use locale::*;
pub use profile::*;
pub use scan::*;
