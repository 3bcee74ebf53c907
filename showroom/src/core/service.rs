//! # Collaborator Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.
//!
//! The showroom talks to two collaborators: an identity provider that answers
//! sign-in requests, and a damage analyzer that turns a capture session into
//! an analysis report. Both are simulated in this demo (see
//! [`crate::services`]), but the application core only ever sees these traits,
//! so tests can substitute instant deterministic implementations.

use async_trait::async_trait;
use shared::{CaptureResult, UserProfile};

/// Identity provider behind the sign-in modal.
///
/// This trait allows for dependency injection and mocking in tests.
/// Errors are plain strings because they surface verbatim in the modal.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Resolve a sign-in request into a profile.
    async fn authenticate(
        &self,
        email: String,
        display_name: String,
    ) -> Result<UserProfile, String>;
}

/// Damage analysis collaborator behind the capture screen.
///
/// This trait allows for dependency injection and mocking in tests.
/// The report side may leave fields unset; the caller substitutes fixed
/// fallbacks when building the ledger record.
#[async_trait]
pub trait DamageAnalyzer: Send + Sync {
    /// Run one analysis pass and produce a report plus the captured image URL.
    async fn analyze(&self) -> Result<CaptureResult, String>;
}
