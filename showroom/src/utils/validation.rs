/// Validation utilities for the sign-in modal
///
/// The demo never checks credentials against anything, but the modal still
/// rejects obviously malformed input before the simulated provider runs.

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    if !email.contains('@') {
        return ValidationResult::err("Invalid email format");
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return ValidationResult::err("Invalid email format");
    }

    if parts[0].is_empty() {
        return ValidationResult::err("Email username cannot be empty");
    }

    if parts[1].is_empty() || !parts[1].contains('.') {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}

/// Validate the display name shown on the profile chip
pub fn validate_display_name(name: &str) -> ValidationResult {
    if name.is_empty() {
        return ValidationResult::err("Display name is required");
    }

    if name.chars().count() < 2 {
        return ValidationResult::err("Display name must be at least 2 characters");
    }

    if name.chars().count() > 40 {
        return ValidationResult::err("Display name must be less than 40 characters");
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("demo@sama.ai").is_valid);
        assert!(validate_email("user@domain.co.uk").is_valid);
        assert!(!validate_email("").is_valid);
        assert!(!validate_email("invalid").is_valid);
        assert!(!validate_email("@sama.ai").is_valid);
        assert!(!validate_email("demo@").is_valid);
        assert!(!validate_email("demo@sama").is_valid);
    }

    #[test]
    fn test_display_name_validation() {
        assert!(validate_display_name("Alex Carter").is_valid);
        assert!(validate_display_name("علي").is_valid);
        assert!(!validate_display_name("").is_valid);
        assert!(!validate_display_name("A").is_valid);
        assert!(!validate_display_name(&"x".repeat(41)).is_valid);
    }
}
