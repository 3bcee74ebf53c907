//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and better testability.
//!
//! This module provides foundational abstractions used throughout the showroom
//! application:
//!
//! - **Error Types**: Centralized error handling (see [`error`] module)
//! - **Collaborator Traits**: Dependency injection traits for better
//!   testability (see [`service`] module)
//!
//! ## Modules
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Collaborator traits (`AuthProvider`, `DamageAnalyzer`)
//!
//! ## Error Handling
//!
//! All application errors use the centralized [`AppError`] type:
//!
//! ```rust,no_run
//! use showroom::core::error::{AppError, Result};
//!
//! fn validate_input(input: &str) -> Result<String> {
//!     if input.is_empty() {
//!         return Err(AppError::Validation("Input cannot be empty".to_string()));
//!     }
//!     Ok(input.to_string())
//! }
//! ```
//!
//! ## Dependency Injection
//!
//! The collaborator traits let tests swap the simulated implementations for
//! deterministic ones:
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use showroom::core::service::DamageAnalyzer;
//!
//! // In production: the canned simulation
//! let analyzer: Arc<dyn DamageAnalyzer> = Arc::new(showroom::services::analyzer::SimulatedAnalyzer::new());
//!
//! // In tests: an instant stub
//! let analyzer: Arc<dyn DamageAnalyzer> = Arc::new(InstantAnalyzer::default());
//! ```

pub mod error;
pub mod service;

// Re-export commonly used types for convenience
#[allow(unused_imports)]
pub use error::{AppError, Result};
#[allow(unused_imports)]
pub use service::{AuthProvider, DamageAnalyzer};
