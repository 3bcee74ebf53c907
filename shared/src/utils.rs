//! # Shared Display Helpers
//!
//! Small formatting functions used by the dashboard and scan cards.
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_confidence;
//!
//! assert_eq!(format_confidence(0.98), "98%");
//! ```

use chrono::{DateTime, Utc};

/// Format a model confidence score in `[0, 1]` as a whole percentage.
///
/// Out-of-range inputs are clamped so a glitchy report never renders "103%".
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_confidence;
///
/// assert_eq!(format_confidence(0.98), "98%");
/// assert_eq!(format_confidence(0.925), "93%");
/// assert_eq!(format_confidence(1.7), "100%");
/// ```
pub fn format_confidence(confidence: f32) -> String {
    let clamped = confidence.clamp(0.0, 1.0);
    format!("{:.0}%", clamped * 100.0)
}

/// Humanize a scan timestamp relative to now: "just now", "5m ago",
/// "3h ago", "2d ago".
pub fn relative_time(timestamp: DateTime<Utc>) -> String {
    relative_time_at(timestamp, Utc::now())
}

/// Same as [`relative_time`] with an explicit reference instant, so display
/// output stays deterministic under test.
pub fn relative_time_at(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(timestamp);
    if elapsed.num_seconds() < 60 {
        return "just now".to_string();
    }
    if elapsed.num_minutes() < 60 {
        return format!("{}m ago", elapsed.num_minutes());
    }
    if elapsed.num_hours() < 24 {
        return format!("{}h ago", elapsed.num_hours());
    }
    format!("{}d ago", elapsed.num_days())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_confidence() {
        assert_eq!(format_confidence(0.98), "98%");
        assert_eq!(format_confidence(0.92), "92%");
        assert_eq!(format_confidence(0.0), "0%");
        assert_eq!(format_confidence(1.0), "100%");
    }

    #[test]
    fn test_format_confidence_clamps() {
        assert_eq!(format_confidence(1.7), "100%");
        assert_eq!(format_confidence(-0.3), "0%");
    }

    #[test]
    fn test_relative_time_buckets() {
        let now = Utc::now();
        assert_eq!(relative_time_at(now, now), "just now");
        assert_eq!(relative_time_at(now - Duration::seconds(30), now), "just now");
        assert_eq!(relative_time_at(now - Duration::minutes(5), now), "5m ago");
        assert_eq!(relative_time_at(now - Duration::hours(3), now), "3h ago");
        assert_eq!(relative_time_at(now - Duration::days(2), now), "2d ago");
        assert_eq!(relative_time_at(now - Duration::days(4), now), "4d ago");
    }
}
