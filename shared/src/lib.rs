//! # Shared Domain Types Library
//!
//! This library defines the domain vocabulary shared across the SAMA showroom
//! application: scan records, user profiles, and interface locale types.
//! All types use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Domain data types
//!   - **[`dto::scan`]**: Scan records, damage levels, and analysis payloads
//!   - **[`dto::profile`]**: User profiles and license roles
//!   - **[`dto::locale`]**: Interface languages and display currencies
//! - **[`utils`]**: Shared display helpers
//!   - **[`utils::format_confidence`]**: Format confidence scores as percentages
//!   - **[`utils::relative_time`]**: Humanize scan timestamps ("2d ago")
//!
//! ## Wire Format
//!
//! All types serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case** in Rust, which maps to **snake_case** in JSON by default
//! - Optional fields are omitted from JSON when `None`
//! - Enum variants serialize as strings (`"English"`, `"USD"`, `"Low"`, ...)
//!   so the preference file stays human-editable
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::locale::{Currency, Language};
//! use shared::dto::profile::{UserProfile, UserRole};
//!
//! let profile = UserProfile::demo(UserRole::Pro);
//! assert_eq!(profile.email, "demo@sama.ai");
//!
//! let price = Currency::Aed.format_amount(29.0);
//! assert!(price.starts_with("AED"));
//!
//! assert_eq!(Language::from_str("Klingon"), None);
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a small domain
// library where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
