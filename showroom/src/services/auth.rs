//! # Demo Identity Provider
//!
//! Simulated sign-in for the showroom. Any well-formed request succeeds after
//! a short artificial delay; no credentials exist and nothing is verified.
//! New profiles always start on the free tier with zero scans.

use crate::core::service::AuthProvider;
use async_trait::async_trait;
use shared::{UserProfile, UserRole};
use std::time::Duration;
use uuid::Uuid;

/// Artificial sign-in latency so the modal's busy state is visible.
const SIGN_IN_DELAY: Duration = Duration::from_millis(650);

/// Identity provider that mints a fresh demo profile per sign-in.
#[derive(Debug, Clone, Default)]
pub struct DemoAuthProvider;

impl DemoAuthProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AuthProvider for DemoAuthProvider {
    async fn authenticate(
        &self,
        email: String,
        display_name: String,
    ) -> Result<UserProfile, String> {
        tokio::time::sleep(SIGN_IN_DELAY).await;

        tracing::debug!(email = %email, "Demo sign-in resolved");

        Ok(UserProfile {
            id: format!("usr_{}", Uuid::new_v4().simple()),
            email,
            display_name,
            role: UserRole::Free,
            scan_count: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_sign_in_mints_free_profile() {
        let provider = DemoAuthProvider::new();
        let profile = provider
            .authenticate("demo@sama.ai".to_string(), "Alex Carter".to_string())
            .await
            .expect("demo sign-in always succeeds");

        assert_eq!(profile.email, "demo@sama.ai");
        assert_eq!(profile.display_name, "Alex Carter");
        assert_eq!(profile.role, UserRole::Free);
        assert_eq!(profile.scan_count, 0);
        assert!(profile.id.starts_with("usr_"));
    }

    #[tokio::test]
    async fn test_each_sign_in_gets_a_distinct_id() {
        let provider = DemoAuthProvider::new();
        let a = provider
            .authenticate("a@sama.ai".to_string(), "A".to_string())
            .await
            .expect("sign-in");
        let b = provider
            .authenticate("b@sama.ai".to_string(), "B".to_string())
            .await
            .expect("sign-in");
        assert_ne!(a.id, b.id);
    }
}
