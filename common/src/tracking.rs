//! Read-side helpers for the Track and Map pages: progress steps, summary
//! counts, date formatting and marker popups.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::model::complaint::{ComplaintRecord, ComplaintStatus};
use crate::model::location::MapLocation;
use crate::model::severity::Severity;

/// Labels of the vertical stepper on each complaint card.
pub const TRACKING_STEPS: [&str; 4] = [
    "Complaint Sent",
    "Received by Municipal",
    "In Process",
    "Pothole Repaired",
];

/// Position of a complaint on [`TRACKING_STEPS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackingProgress {
    /// Index of the active step; `None` for rejected complaints.
    pub active_step: Option<usize>,
    pub rejected: bool,
}

impl TrackingProgress {
    pub fn of(status: &ComplaintStatus) -> Self {
        let active_step = match status {
            ComplaintStatus::Rejected => {
                return Self {
                    active_step: None,
                    rejected: true,
                };
            }
            ComplaintStatus::Received => 1,
            ComplaintStatus::InProcess => 2,
            ComplaintStatus::Buried => 3,
            // Only a buried pothole completes the tracker; `Fixed` is a map-side status.
            ComplaintStatus::Sent | ComplaintStatus::Fixed | ComplaintStatus::Other(_) => 0,
        };
        Self {
            active_step: Some(active_step),
            rejected: false,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.active_step == Some(TRACKING_STEPS.len() - 1)
    }

    /// Left border modifier of the complaint card.
    pub fn card_class(&self) -> &'static str {
        if self.rejected {
            "complaint-card rejected"
        } else if self.is_complete() {
            "complaint-card complete"
        } else {
            "complaint-card open"
        }
    }
}

/// Dashboard counts above the complaint list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComplaintStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub rejected: usize,
}

impl ComplaintStats {
    pub fn from_complaints(complaints: &[ComplaintRecord]) -> Self {
        let mut stats = ComplaintStats {
            total: complaints.len(),
            ..Default::default()
        };
        for complaint in complaints {
            match complaint.status() {
                ComplaintStatus::Buried => stats.completed += 1,
                ComplaintStatus::Rejected => stats.rejected += 1,
                _ => {}
            }
        }
        stats.pending = stats.total - stats.completed - stats.rejected;
        stats
    }
}

/// Counts shown next to the public map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapStats {
    pub total: usize,
    pub severe: usize,
    pub moderate: usize,
    pub minor: usize,
    pub unknown: usize,
    pub fixed: usize,
    pub pending: usize,
}

impl MapStats {
    pub fn from_locations(locations: &[MapLocation]) -> Self {
        let mut stats = MapStats {
            total: locations.len(),
            ..Default::default()
        };
        for location in locations {
            match location.severity() {
                Severity::Severe => stats.severe += 1,
                Severity::Moderate => stats.moderate += 1,
                Severity::Minor => stats.minor += 1,
                Severity::Unknown => stats.unknown += 1,
            }
            match ComplaintStatus::parse(location.status.as_deref()) {
                ComplaintStatus::Fixed => stats.fixed += 1,
                _ => stats.pending += 1,
            }
        }
        stats
    }
}

fn parse_timestamp(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// `"Apr 15, 2025"` for anything the backend is known to emit, `"N/A"` when
/// the value is missing, and the raw text when it cannot be parsed.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return "N/A".to_string();
    };
    match parse_timestamp(raw) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Escapes text before it is embedded in marker popup HTML.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Popup body for a map marker.
pub fn popup_html(status: &str, severity: Severity, timestamp: Option<&str>) -> String {
    format!(
        concat!(
            r#"<div class="popup">"#,
            r#"<h3>Pothole Details</h3>"#,
            r#"<p><strong>Status:</strong> {}</p>"#,
            r#"<p><strong>Severity:</strong> {}</p>"#,
            r#"<p><strong>Reported:</strong> {}</p>"#,
            r#"</div>"#
        ),
        escape_html(status),
        severity,
        escape_html(&format_date(timestamp)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complaint(status: Option<&str>) -> ComplaintRecord {
        ComplaintRecord {
            complaint_id: None,
            latitude: None,
            longitude: None,
            message: None,
            status: status.map(str::to_string),
            severity: None,
            timestamp: None,
            image_url: None,
        }
    }

    #[test]
    fn progress_follows_status() {
        assert_eq!(TrackingProgress::of(&ComplaintStatus::Sent).active_step, Some(0));
        assert_eq!(TrackingProgress::of(&ComplaintStatus::Received).active_step, Some(1));
        assert_eq!(TrackingProgress::of(&ComplaintStatus::InProcess).active_step, Some(2));
        let done = TrackingProgress::of(&ComplaintStatus::Buried);
        assert!(done.is_complete());
        assert_eq!(done.card_class(), "complaint-card complete");

        let fixed = TrackingProgress::of(&ComplaintStatus::Fixed);
        assert_eq!(fixed.active_step, Some(0));
        assert!(!fixed.is_complete());

        let rejected = TrackingProgress::of(&ComplaintStatus::Rejected);
        assert!(rejected.rejected);
        assert_eq!(rejected.active_step, None);
    }

    #[test]
    fn complaint_stats_split_by_status() {
        let complaints = vec![
            complaint(Some("Pothole Buried")),
            complaint(Some("Rejected")),
            complaint(Some("In Process")),
            complaint(Some("Fixed")),
            complaint(None),
        ];
        assert_eq!(
            ComplaintStats::from_complaints(&complaints),
            ComplaintStats {
                total: 5,
                completed: 1,
                pending: 3,
                rejected: 1,
            }
        );
    }

    #[test]
    fn map_stats_count_severity_and_fixes() {
        let locations: Vec<MapLocation> = serde_json::from_str(
            r#"[
                {"latitude": 1, "longitude": 2, "severity": "Severe", "status": "Fixed"},
                {"latitude": 1, "longitude": 2, "severity": "Minor", "status": "Pending"},
                {"latitude": 1, "longitude": 2, "severity": "Moderate", "status": "Pothole Buried"},
                {"latitude": 1, "longitude": 2, "severity": "Unknown"},
                {"latitude": 1, "longitude": 2}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            MapStats::from_locations(&locations),
            MapStats {
                total: 5,
                severe: 1,
                moderate: 1,
                minor: 1,
                unknown: 2,
                fixed: 1,
                pending: 4,
            }
        );
    }

    #[test]
    fn dates_in_backend_formats() {
        assert_eq!(format_date(Some("Tue, 15 Apr 2025 10:00:00 GMT")), "Apr 15, 2025");
        assert_eq!(format_date(Some("2025-04-05T08:30:00.123456")), "Apr 5, 2025");
        assert_eq!(format_date(Some("2025-04-05T08:30:00Z")), "Apr 5, 2025");
        assert_eq!(format_date(None), "N/A");
        assert_eq!(format_date(Some("someday")), "someday");
    }

    #[test]
    fn popup_escapes_backend_text() {
        let html = popup_html("<b>Pending</b>", Severity::Minor, None);
        assert!(html.contains("&lt;b&gt;Pending&lt;/b&gt;"));
        assert!(html.contains("<strong>Severity:</strong> Minor"));
        assert!(html.contains("N/A"));
    }
}
