use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Damage severity assigned by the analysis pipeline
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DamageLevel {
    None,
    Low,
    Medium,
    High,
}

impl DamageLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DamageLevel::None => "None",
            DamageLevel::Low => "Low",
            DamageLevel::Medium => "Medium",
            DamageLevel::High => "High",
        }
    }

    /// Severity rank for sorting and badge coloring (0 = no damage)
    pub fn severity(&self) -> u8 {
        match self {
            DamageLevel::None => 0,
            DamageLevel::Low => 1,
            DamageLevel::Medium => 2,
            DamageLevel::High => 3,
        }
    }
}

impl std::fmt::Display for DamageLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Processing state of a scan in the ledger
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScanStatus {
    Ready,
    Processing,
}

impl ScanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanStatus::Ready => "Ready",
            ScanStatus::Processing => "Processing",
        }
    }
}

/// A completed (or in-flight) vehicle scan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub vehicle_model: String,
    pub damage_level: DamageLevel,
    pub status: ScanStatus,
    /// Model confidence in [0, 1]
    pub confidence: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub findings: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Raw result produced by the damage analysis collaborator.
///
/// Every field the model might fail to produce is optional; the ledger fills
/// in fixed fallbacks when it records the scan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage_level: Option<DamageLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
    #[serde(default)]
    pub findings: Vec<String>,
}

/// A finished capture: the analysis report plus the frame it was taken from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaptureResult {
    pub report: AnalysisReport,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_level_severity_order() {
        assert!(DamageLevel::None.severity() < DamageLevel::Low.severity());
        assert!(DamageLevel::Low.severity() < DamageLevel::Medium.severity());
        assert!(DamageLevel::Medium.severity() < DamageLevel::High.severity());
    }

    #[test]
    fn test_damage_level_serializes_display_string() {
        let json = serde_json::to_string(&DamageLevel::Medium).expect("serialize");
        assert_eq!(json, "\"Medium\"");
    }

    #[test]
    fn test_scan_record_tolerates_missing_lists() {
        // Older payloads carried no findings/recommendations keys
        let json = r#"{
            "id": "SAMA-1234",
            "timestamp": "2025-06-01T12:00:00Z",
            "vehicle_model": "Tesla Model 3",
            "damage_level": "Low",
            "status": "Ready",
            "confidence": 0.98
        }"#;
        let record: ScanRecord = serde_json::from_str(json).expect("deserialize");
        assert!(record.findings.is_empty());
        assert!(record.recommendations.is_empty());
        assert_eq!(record.image_url, None);
    }
}
