//! Debug configuration from environment variables

use std::path::PathBuf;

/// Debug system configuration
#[derive(Debug, Clone)]
pub struct DebugConfig {
    /// Log file path
    pub log_file: PathBuf,
    /// Log level filter (e.g. "showroom=debug,info")
    pub log_level: String,
    /// Enable in-UI debug overlay
    pub show_debug_ui: bool,
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("logs/showroom.log"),
            log_level: std::env::var("SAMA_LOG").unwrap_or_else(|_| "showroom=info,warn".to_string()),
            show_debug_ui: std::env::var("SAMA_DEBUG_UI")
                .map(|v| v == "1")
                .unwrap_or(false),
            log_dir: PathBuf::from("logs"),
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let log_dir = std::env::var("SAMA_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("logs"));

        Self {
            log_file: log_dir.join("showroom.log"),
            log_level: std::env::var("SAMA_LOG").unwrap_or_else(|_| "showroom=info,warn".to_string()),
            show_debug_ui: std::env::var("SAMA_DEBUG_UI")
                .map(|v| v == "1")
                .unwrap_or(false),
            log_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DebugConfig::default();
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert_eq!(config.log_file, PathBuf::from("logs/showroom.log"));
    }
}
