use serde::{Deserialize, Serialize};

use crate::model::severity::{Severity, SeverityCounts};

/// Response of `POST /detect`.
///
/// `image_url` is the annotated image (usually a `data:` URL) that replaces
/// the local preview once detection completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionResult {
    pub potholes_detected: bool,
    #[serde(default)]
    pub detections_count: Option<u32>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub processed_image_path: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub severity_counts: SeverityCounts,
}

impl DetectionResult {
    /// Severity attached to a complaint built from this detection.
    pub fn severity(&self) -> Severity {
        Severity::worst_of(&self.severity_counts)
    }

    /// Backend message, if it sent a non-blank one.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().map(str::trim).filter(|m| !m.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_backend_response() {
        let json = r#"{
            "potholesDetected": true,
            "detectionsCount": 2,
            "severityCounts": {"Minor": 1, "Severe": 1},
            "predictions": [],
            "imageUrl": "data:image/jpeg;base64,AAAA",
            "processedImagePath": "/uploads/processed_1.jpg",
            "message": "Potholes detected: 1 Minor, 1 Severe"
        }"#;
        let result: DetectionResult = serde_json::from_str(json).unwrap();
        assert!(result.potholes_detected);
        assert_eq!(result.detections_count, Some(2));
        assert_eq!(result.severity(), Severity::Severe);
        assert_eq!(result.message(), Some("Potholes detected: 1 Minor, 1 Severe"));
    }

    #[test]
    fn minimal_response_defaults_optional_fields() {
        let result: DetectionResult = serde_json::from_str(r#"{"potholesDetected": false}"#).unwrap();
        assert!(!result.potholes_detected);
        assert!(result.image_url.is_none());
        assert!(result.message().is_none());
        assert_eq!(result.severity(), Severity::Unknown);
    }
}
