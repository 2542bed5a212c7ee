//! Upload / detect / report workflow of the Upload page.
//!
//! The workflow owns everything the page shows and decides which requests
//! may be issued. It never performs I/O itself: `request_detection` and
//! `request_report` hand back a command when (and only when) every
//! precondition holds, and the page feeds the outcome back through the
//! matching `*_succeeded` / `*_failed` call.
//!
//! Phases:
//!
//! ```text
//! Idle --select--> ImageSelected --detect--> Detecting --+--> Reportable --send--> Reporting --ok--> Idle
//!                        ^                               |         ^                   |
//!                        +----------- error -------------+         +------ error ------+
//!                                                        +--> NoDetection
//! ```
//!
//! `F` is the handle of the selected file (a browser `File` in the app).

use crate::error::ApiError;
use crate::model::coordinates::Coordinates;
use crate::model::detection::DetectionResult;
use crate::model::severity::Severity;
use crate::notice::Notice;
use crate::requests::{ComplaintRequest, DetectFields};

/// Device position as far as the page knows it.
#[derive(Debug, Clone, PartialEq)]
pub enum Geolocation {
    Fetching,
    Resolved(Coordinates),
    Unavailable(String),
}

impl Geolocation {
    pub fn coordinates(&self) -> Option<Coordinates> {
        match self {
            Geolocation::Resolved(coordinates) => Some(*coordinates),
            _ => None,
        }
    }

    /// `(latitude, longitude)` as displayed on the page.
    pub fn display(&self) -> (String, String) {
        match self {
            Geolocation::Fetching => ("Fetching...".to_string(), "Fetching...".to_string()),
            Geolocation::Resolved(c) => (c.latitude.to_string(), c.longitude.to_string()),
            Geolocation::Unavailable(_) => ("Unavailable".to_string(), "Unavailable".to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    Idle,
    ImageSelected,
    Detecting,
    NoDetection,
    Reportable,
    Reporting,
}

/// Multipart upload to `POST /detect`.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectCommand<F> {
    pub file: F,
    pub fields: DetectFields,
}

/// Complaint submission to `POST /send-email`, sent with `user_id` in the
/// `User-Id` header.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportCommand {
    pub user_id: String,
    pub request: ComplaintRequest,
}

#[derive(Debug, Clone)]
pub struct UploadWorkflow<F> {
    geolocation: Geolocation,
    phase: UploadPhase,
    file: Option<F>,
    /// Bumped on every accepted selection; previews carry the value they were
    /// read for.
    selection: u64,
    preview: Option<String>,
    detection: Option<DetectionResult>,
    description: String,
    status: Option<Notice>,
}

impl<F> Default for UploadWorkflow<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> UploadWorkflow<F> {
    /// Fresh page: no image, geolocation still being fetched.
    pub fn new() -> Self {
        Self {
            geolocation: Geolocation::Fetching,
            phase: UploadPhase::Idle,
            file: None,
            selection: 0,
            preview: None,
            detection: None,
            description: String::new(),
            status: None,
        }
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    pub fn geolocation(&self) -> &Geolocation {
        &self.geolocation
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    pub fn detection(&self) -> Option<&DetectionResult> {
        self.detection.as_ref()
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn status(&self) -> Option<&Notice> {
        self.status.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, UploadPhase::Detecting | UploadPhase::Reporting)
    }

    pub fn potholes_detected(&self) -> bool {
        self.detection.as_ref().is_some_and(|d| d.potholes_detected)
    }

    /// The report section is shown only after a positive detection.
    pub fn report_visible(&self) -> bool {
        matches!(self.phase, UploadPhase::Reportable | UploadPhase::Reporting)
    }

    /// Severity that will be attached to the complaint.
    pub fn severity(&self) -> Option<Severity> {
        self.detection
            .as_ref()
            .filter(|d| d.potholes_detected)
            .map(DetectionResult::severity)
    }

    /// Detect is enabled once an image is chosen and geolocation has settled.
    pub fn can_detect(&self) -> bool {
        !self.is_busy() && self.file.is_some() && self.geolocation != Geolocation::Fetching
    }

    pub fn detect_label(&self) -> &'static str {
        if self.phase == UploadPhase::Detecting {
            "Processing..."
        } else if self.file.is_some() {
            "Detect Potholes"
        } else {
            "Select Image First"
        }
    }

    pub fn can_send(&self) -> bool {
        !self.is_busy() && !self.description.trim().is_empty()
    }

    pub fn send_label(&self) -> &'static str {
        if self.phase == UploadPhase::Reporting {
            "Sending..."
        } else {
            "Send Report Email"
        }
    }

    pub fn location_resolved(&mut self, coordinates: Coordinates) {
        self.geolocation = Geolocation::Resolved(coordinates);
    }

    pub fn location_failed(&mut self, reason: &str) {
        log::warn!("geolocation unavailable: {}", reason);
        self.geolocation = Geolocation::Unavailable(reason.to_string());
        self.status = Some(Notice::error(format!(
            "Error fetching location: {}. Using defaults.",
            reason
        )));
    }

    /// A new image discards whatever the previous one produced.
    ///
    /// Returns the selection number to hand back to [`Self::set_preview`], or
    /// `None` when the selection was ignored because a request is in flight.
    pub fn select_image(&mut self, file: F) -> Option<u64> {
        if self.is_busy() {
            log::debug!("ignoring image selection while a request is in flight");
            return None;
        }
        self.selection += 1;
        self.file = Some(file);
        self.preview = None;
        self.detection = None;
        self.description.clear();
        self.status = None;
        self.phase = UploadPhase::ImageSelected;
        Some(self.selection)
    }

    /// Local preview of the selected image, once it has been read. Previews
    /// read for an earlier selection are dropped.
    pub fn set_preview(&mut self, selection: u64, data_url: String) {
        if selection != self.selection {
            log::debug!("dropping preview for replaced selection {}", selection);
            return;
        }
        if self.phase == UploadPhase::ImageSelected && self.file.is_some() {
            self.preview = Some(data_url);
        }
    }

    /// The picker was closed without choosing a file.
    pub fn clear_selection(&mut self) {
        if self.is_busy() {
            return;
        }
        self.file = None;
        self.preview = None;
        self.detection = None;
        self.phase = UploadPhase::Idle;
        self.status = Some(Notice::warning("File selection cancelled."));
    }

    pub fn set_description(&mut self, text: String) {
        self.description = text;
    }

    pub fn dismiss_status(&mut self) {
        self.status = None;
    }
}

impl<F: Clone> UploadWorkflow<F> {
    /// Checks the detection preconditions and, if they hold, moves to
    /// `Detecting` and returns the upload to perform.
    pub fn request_detection(&mut self) -> Option<DetectCommand<F>> {
        if self.is_busy() {
            return None;
        }
        let Some(file) = self.file.clone() else {
            self.status = Some(Notice::warning("Please choose an image file to upload."));
            return None;
        };
        let Some(coordinates) = self.geolocation.coordinates() else {
            self.status = Some(Notice::info(
                "Waiting for location data... Please ensure location services are enabled.",
            ));
            return None;
        };

        self.status = Some(Notice::info("Processing image..."));
        self.preview = None;
        self.detection = None;
        self.phase = UploadPhase::Detecting;
        Some(DetectCommand {
            file,
            fields: DetectFields::from(coordinates),
        })
    }

    pub fn detection_succeeded(&mut self, result: DetectionResult) {
        if self.phase != UploadPhase::Detecting {
            log::debug!("dropping detection result outside of Detecting");
            return;
        }
        self.preview = result.image_url.clone();
        if result.potholes_detected {
            let message = result.message().unwrap_or("Potholes detected!");
            self.status = Some(Notice::success(format!(
                "{} You can now report this.",
                message
            )));
            self.phase = UploadPhase::Reportable;
        } else {
            let message = result.message().unwrap_or("No potholes found.");
            self.status = Some(Notice::info(message));
            self.phase = UploadPhase::NoDetection;
        }
        self.detection = Some(result);
    }

    pub fn detection_failed(&mut self, err: &ApiError) {
        if self.phase != UploadPhase::Detecting {
            return;
        }
        let reason = match err {
            ApiError::NoResponse { .. } => {
                "No response received from server. Check network or backend status.".to_string()
            }
            other => other.to_string(),
        };
        self.status = Some(Notice::error(format!("Error detecting pothole: {}", reason)));
        self.preview = None;
        self.detection = None;
        self.phase = UploadPhase::ImageSelected;
    }

    /// Checks the report preconditions, in the order the user would fix them,
    /// and returns the complaint to send.
    ///
    /// `correlation_token` becomes the complaint's `imageId`.
    pub fn request_report(
        &mut self,
        user_id: Option<String>,
        correlation_token: String,
    ) -> Option<ReportCommand> {
        if self.is_busy() {
            return None;
        }
        if self.description.trim().is_empty() {
            self.status = Some(Notice::warning(
                "Please write a message before sending the email.",
            ));
            return None;
        }
        let detection = match &self.detection {
            Some(detection) if detection.potholes_detected => detection,
            _ => {
                self.status = Some(Notice::warning(
                    "Cannot send report: No potholes were detected in the last analysis.",
                ));
                return None;
            }
        };
        let Some(coordinates) = self.geolocation.coordinates() else {
            self.status = Some(Notice::info(
                "Waiting for location data... Please ensure location services are enabled.",
            ));
            return None;
        };
        let Some(user_id) = user_id else {
            self.status = Some(Notice::error(
                "User not logged in. Please log in to send complaints.",
            ));
            return None;
        };

        let request = ComplaintRequest {
            message: self.description.clone(),
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
            severity: detection.severity(),
            image_id: correlation_token,
        };
        self.status = Some(Notice::info("Sending report..."));
        self.phase = UploadPhase::Reporting;
        Some(ReportCommand { user_id, request })
    }

    /// Back to `Idle`; the resolved location is kept for the next report.
    pub fn report_succeeded(&mut self) {
        if self.phase != UploadPhase::Reporting {
            return;
        }
        self.file = None;
        self.preview = None;
        self.detection = None;
        self.description.clear();
        self.phase = UploadPhase::Idle;
        self.status = Some(Notice::success(
            "Report sent successfully to the municipal corporation.",
        ));
    }

    pub fn report_failed(&mut self, err: &ApiError) {
        if self.phase != UploadPhase::Reporting {
            return;
        }
        self.status = Some(Notice::error(format!("Error sending report: {}", err)));
        self.phase = UploadPhase::Reportable;
    }
}
