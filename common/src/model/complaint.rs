use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::coordinates::{lenient_coordinate, pair, Coordinates};
use crate::model::severity::Severity;

/// A complaint the current user has submitted, as listed by
/// `GET /user/complaints/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplaintRecord {
    #[serde(default)]
    pub complaint_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl ComplaintRecord {
    pub fn status(&self) -> ComplaintStatus {
        ComplaintStatus::parse(self.status.as_deref())
    }

    pub fn coordinates(&self) -> Option<Coordinates> {
        pair(self.latitude, self.longitude)
    }

    /// Heading shown on the Track page: the backend id, or the 1-based
    /// position in the list when the record has none.
    pub fn display_id(&self, index: usize) -> String {
        match &self.complaint_id {
            Some(id) if !id.is_empty() => id.clone(),
            _ => (index + 1).to_string(),
        }
    }

    pub fn description(&self) -> &str {
        match self.message.as_deref() {
            Some(message) if !message.trim().is_empty() => message,
            _ => "No description provided.",
        }
    }
}

/// Envelope of the complaints listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComplaintList {
    #[serde(default)]
    pub complaints: Vec<ComplaintRecord>,
}

/// Processing stage of a complaint on the municipal side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComplaintStatus {
    Sent,
    Received,
    InProcess,
    Buried,
    Fixed,
    Rejected,
    Other(String),
}

impl ComplaintStatus {
    /// Missing statuses and the backend's `"Pending"` default both mean the
    /// complaint was sent and nothing has happened yet.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") | Some("Pending") | Some("Complaint Sent") => ComplaintStatus::Sent,
            Some("Received by Municipal Corporation") => ComplaintStatus::Received,
            Some("In Process") => ComplaintStatus::InProcess,
            Some("Pothole Buried") => ComplaintStatus::Buried,
            Some("Fixed") => ComplaintStatus::Fixed,
            Some("Rejected") => ComplaintStatus::Rejected,
            Some(other) => ComplaintStatus::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ComplaintStatus::Sent => "Complaint Sent",
            ComplaintStatus::Received => "Received by Municipal Corporation",
            ComplaintStatus::InProcess => "In Process",
            ComplaintStatus::Buried => "Pothole Buried",
            ComplaintStatus::Fixed => "Fixed",
            ComplaintStatus::Rejected => "Rejected",
            ComplaintStatus::Other(text) => text,
        }
    }

    /// CSS modifier for the status chip.
    pub fn chip_class(&self) -> &'static str {
        match self {
            ComplaintStatus::Buried | ComplaintStatus::Fixed => "chip-success",
            ComplaintStatus::InProcess => "chip-info",
            ComplaintStatus::Received => "chip-primary",
            ComplaintStatus::Rejected => "chip-error",
            ComplaintStatus::Sent | ComplaintStatus::Other(_) => "chip-warning",
        }
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_listing_with_mixed_coordinate_types() {
        let json = r#"{"complaints": [
            {"complaint_id": "c-1", "latitude": 17.97, "longitude": "73.59",
             "message": "deep", "status": "In Process", "severity": "Severe",
             "timestamp": "Tue, 15 Apr 2025 10:00:00 GMT", "image_url": "http://x/1.jpg"},
            {"latitude": "Unknown", "longitude": "Unknown"}
        ]}"#;
        let list: ComplaintList = serde_json::from_str(json).unwrap();
        assert_eq!(list.complaints.len(), 2);

        let first = &list.complaints[0];
        assert_eq!(first.coordinates(), Some(Coordinates::new(17.97, 73.59)));
        assert_eq!(first.status(), ComplaintStatus::InProcess);
        assert_eq!(first.severity, Some(Severity::Severe));

        let second = &list.complaints[1];
        assert_eq!(second.coordinates(), None);
        assert_eq!(second.status(), ComplaintStatus::Sent);
        assert_eq!(second.display_id(1), "2");
        assert_eq!(second.description(), "No description provided.");
    }

    #[test]
    fn unknown_status_is_kept_verbatim() {
        let status = ComplaintStatus::parse(Some("Escalated"));
        assert_eq!(status, ComplaintStatus::Other("Escalated".to_string()));
        assert_eq!(status.label(), "Escalated");
        assert_eq!(status.chip_class(), "chip-warning");
    }
}
