//! # Utility Functions
//!
//! Shared utility functions used across the showroom application.
//!
//! ## Modules
//!
//! - **[`runtime`]**: Shared Tokio runtime for background tasks
//! - **[`validation`]**: Input validation utilities (email, display name)
//!
//! ## Related Modules
//!
//! - [`shared::utils`]: Cross-crate display helpers (confidence, timestamps)
//! - [`crate::core`]: Core abstractions and error types

pub mod runtime;
pub mod validation;
