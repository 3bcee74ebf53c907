use serde::{Deserialize, Serialize};

/// License tier attached to a session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    Free,
    Pro,
    Expert,
}

impl UserRole {
    /// Wire/display form ("FREE", "PRO", "EXPERT")
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Free => "FREE",
            UserRole::Pro => "PRO",
            UserRole::Expert => "EXPERT",
        }
    }

    /// Longer label for profile cards
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Free => "Free tier",
            UserRole::Pro => "Pro license",
            UserRole::Expert => "Expert license",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signed-in user profile (session-scoped, never persisted)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub role: UserRole,
    pub scan_count: u32,
}

impl UserProfile {
    /// The canonical demo identity, used when an upgrade happens without a
    /// signed-in session.
    pub fn demo(role: UserRole) -> Self {
        UserProfile {
            id: "usr_1".to_string(),
            email: "demo@sama.ai".to_string(),
            display_name: "Alex Carter".to_string(),
            role,
            scan_count: 0,
        }
    }

    /// First name shown in the nav button
    pub fn first_name(&self) -> &str {
        self.display_name
            .split_whitespace()
            .next()
            .unwrap_or(&self.display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_uppercase() {
        let json = serde_json::to_string(&UserRole::Expert).expect("serialize");
        assert_eq!(json, "\"EXPERT\"");
        let back: UserRole = serde_json::from_str("\"FREE\"").expect("deserialize");
        assert_eq!(back, UserRole::Free);
    }

    #[test]
    fn test_demo_identity() {
        let profile = UserProfile::demo(UserRole::Pro);
        assert_eq!(profile.id, "usr_1");
        assert_eq!(profile.email, "demo@sama.ai");
        assert_eq!(profile.display_name, "Alex Carter");
        assert_eq!(profile.role, UserRole::Pro);
        assert_eq!(profile.scan_count, 0);
    }

    #[test]
    fn test_first_name() {
        assert_eq!(UserProfile::demo(UserRole::Free).first_name(), "Alex");
        let mut profile = UserProfile::demo(UserRole::Free);
        profile.display_name = "Cher".to_string();
        assert_eq!(profile.first_name(), "Cher");
    }
}
