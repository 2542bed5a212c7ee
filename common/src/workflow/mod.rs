mod upload;

pub use upload::{DetectCommand, Geolocation, ReportCommand, UploadPhase, UploadWorkflow};
