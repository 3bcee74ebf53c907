//! # Common Error Types
//!
//! Consolidated error handling for the showroom application.
//!
//! This module provides a centralized error type [`AppError`] that covers all
//! error scenarios in the showroom.
//!
//! ## Error Categories
//!
//! Errors are categorized by their source:
//!
//! - **Prefs**: Preference persistence errors (file I/O, JSON serialization)
//! - **State**: Application state management errors (invalid transitions)
//! - **Validation**: Input validation errors (invalid format, missing fields)
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use showroom::core::error::AppError;
//!
//! fn validate_email(email: &str) -> Result<(), AppError> {
//!     if !email.contains('@') {
//!         return Err(AppError::Validation("Invalid email format".to_string()));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Conversion
//!
//! Common error types automatically convert to `AppError`:
//!
//! - `std::io::Error` → `AppError::Prefs`
//! - `serde_json::Error` → `AppError::Prefs`

use thiserror::Error;

/// Application-wide error type covering all error scenarios in the showroom.
///
/// Each variant includes a descriptive `String` message for context. The
/// `#[error]` attribute from `thiserror` provides automatic `Display` and
/// `Error` implementations.
///
/// # Example
///
/// ```rust
/// use showroom::core::error::AppError;
///
/// let prefs_err = AppError::Prefs("sama-prefs.json is not valid JSON".to_string());
/// let validation_err = AppError::Validation("Display name is required".to_string());
///
/// assert_eq!(prefs_err.to_string(), "Preferences error: sama-prefs.json is not valid JSON");
/// assert_eq!(validation_err.to_string(), "Validation error: Display name is required");
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Preference persistence error.
    ///
    /// Used for failures while reading or writing the preference file:
    /// - File I/O failures (permissions, missing parent directory)
    /// - JSON serialization failures
    ///
    /// Preference errors are never fatal; callers log them and continue with
    /// the in-memory values.
    #[error("Preferences error: {0}")]
    Prefs(String),

    /// Application state management error.
    ///
    /// Used for errors related to state management:
    /// - Invalid state transitions (e.g. completing a checkout that was
    ///   never started)
    /// - State corruption (should never happen in normal operation)
    #[error("State error: {0}")]
    State(String),

    /// Input validation error.
    ///
    /// Used for user input validation failures:
    /// - Invalid format (email shape)
    /// - Missing required fields (display name)
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
///
/// Use this throughout the showroom crate for consistent error handling:
///
/// ```rust
/// use showroom::core::error::Result;
///
/// fn operation() -> Result<String> {
///     Ok("success".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Prefs(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Prefs(err.to_string())
    }
}
