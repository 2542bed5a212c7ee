use common::error::ApiError;
use common::model::coordinates::Coordinates;
use common::model::detection::DetectionResult;
use common::requests::Acknowledgement;

pub enum Msg {
    LocationResolved(Coordinates),
    LocationFailed(String),
    /// `None` when the picker was closed without a choice.
    FileChanged(Option<web_sys::File>),
    PreviewReady { selection: u64, data_url: String },
    Detect,
    DetectFinished(Result<DetectionResult, ApiError>),
    DescriptionChanged(String),
    SendReport,
    ReportFinished(Result<Acknowledgement, ApiError>),
    DismissStatus,
}
