//! # Preference Store
//!
//! The only state the showroom persists: the visitor's language and currency.
//!
//! Preferences live in a small JSON file (`sama-prefs.json` next to the
//! binary, overridable with `SAMA_PREFS_PATH`) holding exactly two keys:
//!
//! ```json
//! {
//!   "language": "English",
//!   "currency": "USD"
//! }
//! ```
//!
//! Loading is tolerant per key: a missing file, unreadable file, malformed
//! JSON, or an out-of-domain value never fails the application. Each key that
//! cannot be resolved falls back to its default (English / USD) independently
//! of the other, so a hand-edited file with one bad entry keeps the good one.
//! Saving is best-effort; callers log failures and continue.

use crate::core::Result;
use serde::{Deserialize, Serialize};
use shared::{Currency, Language};
use std::fs;
use std::path::{Path, PathBuf};

/// Default preference file name, resolved relative to the working directory.
pub const PREFS_FILE: &str = "sama-prefs.json";

/// Environment variable overriding the preference file location.
pub const PREFS_PATH_ENV: &str = "SAMA_PREFS_PATH";

/// Resolve the preference file path, honoring `SAMA_PREFS_PATH`.
pub fn prefs_path() -> PathBuf {
    std::env::var(PREFS_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(PREFS_FILE))
}

/// The persisted preference pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub language: Language,
    pub currency: Currency,
}

impl Preferences {
    /// Load preferences from the resolved path.
    pub fn load() -> Self {
        Self::load_from_file(&prefs_path())
    }

    /// Persist preferences to the resolved path.
    pub fn save(&self) -> Result<()> {
        self.save_to_file(&prefs_path())
    }

    /// Load preferences from `path`, falling back per key on any problem.
    pub fn load_from_file(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read preferences, using defaults");
                return Self::default();
            }
        };

        let doc: serde_json::Value = match serde_json::from_str(&text) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Preferences file is not valid JSON, using defaults");
                return Self::default();
            }
        };

        // Each key is validated on its own so one bad entry cannot take the
        // other down with it.
        let language = match doc.get("language") {
            Some(value) => match value.as_str().and_then(Language::from_str) {
                Some(language) => language,
                None => {
                    tracing::warn!(value = %value, "Unrecognized language preference, using English");
                    Language::default()
                }
            },
            None => Language::default(),
        };

        let currency = match doc.get("currency") {
            Some(value) => match value.as_str().and_then(Currency::from_code) {
                Some(currency) => currency,
                None => {
                    tracing::warn!(value = %value, "Unrecognized currency preference, using USD");
                    Currency::default()
                }
            },
            None => Currency::default(),
        };

        Self { language, currency }
    }

    /// Write preferences to `path` as pretty JSON, creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("sama-prefs-test-{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let prefs = Preferences::load_from_file(Path::new("definitely/not/here.json"));
        assert_eq!(prefs.language, Language::English);
        assert_eq!(prefs.currency, Currency::Usd);
    }

    #[test]
    fn test_garbage_file_yields_defaults() {
        let path = temp_path();
        fs::write(&path, "not json at all {{{").expect("write temp file");
        let prefs = Preferences::load_from_file(&path);
        assert_eq!(prefs, Preferences::default());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_per_key_fallback_keeps_valid_entry() {
        let path = temp_path();
        fs::write(&path, r#"{"language": "Arabic", "currency": "DOGE"}"#).expect("write temp file");
        let prefs = Preferences::load_from_file(&path);
        assert_eq!(prefs.language, Language::Arabic);
        assert_eq!(prefs.currency, Currency::Usd);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_per_key_fallback_survives_wrong_types() {
        let path = temp_path();
        fs::write(&path, r#"{"language": 7, "currency": "AED"}"#).expect("write temp file");
        let prefs = Preferences::load_from_file(&path);
        assert_eq!(prefs.language, Language::English);
        assert_eq!(prefs.currency, Currency::Aed);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_keys_fall_back() {
        let path = temp_path();
        fs::write(&path, r#"{"currency": "EUR"}"#).expect("write temp file");
        let prefs = Preferences::load_from_file(&path);
        assert_eq!(prefs.language, Language::English);
        assert_eq!(prefs.currency, Currency::Eur);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let path = temp_path();
        let prefs = Preferences {
            language: Language::Chinese,
            currency: Currency::Cny,
        };
        prefs.save_to_file(&path).expect("save preferences");
        assert_eq!(Preferences::load_from_file(&path), prefs);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_saved_file_uses_string_keys() {
        let path = temp_path();
        Preferences::default().save_to_file(&path).expect("save preferences");
        let text = fs::read_to_string(&path).expect("read back");
        let doc: serde_json::Value = serde_json::from_str(&text).expect("parse back");
        assert_eq!(doc["language"], "English");
        assert_eq!(doc["currency"], "USD");
        let _ = fs::remove_file(&path);
    }
}
