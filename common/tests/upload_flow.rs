//! Page-level scenarios driven through the public API of `common`, with the
//! backend replaced by canned JSON responses.

use common::error::ApiError;
use common::forms::LoginForm;
use common::model::coordinates::Coordinates;
use common::model::detection::DetectionResult;
use common::model::profile::Profile;
use common::model::severity::Severity;
use common::notice::NoticeLevel;
use common::requests::LoginResponse;
use common::session::{GuardCommand, Session, SessionGuard};
use common::workflow::{UploadPhase, UploadWorkflow};

#[derive(Debug, Clone, PartialEq)]
struct FakeFile(&'static str);

#[test]
fn select_detect_report_and_reset() {
    let session = Session::in_memory();
    session.sign_in("abc123");

    let mut workflow: UploadWorkflow<FakeFile> = UploadWorkflow::new();
    assert_eq!(workflow.phase(), UploadPhase::Idle);
    workflow.location_resolved(Coordinates::new(18.52, 73.85));

    workflow.select_image(FakeFile("crack.jpg"));
    assert_eq!(workflow.phase(), UploadPhase::ImageSelected);

    let detect = workflow.request_detection().expect("detection should be allowed");
    assert_eq!(detect.file, FakeFile("crack.jpg"));

    let response: DetectionResult = serde_json::from_str(
        r#"{"potholesDetected": true, "imageUrl": "u", "severityCounts": {"Severe": 1}}"#,
    )
    .unwrap();
    workflow.detection_succeeded(response);

    assert!(workflow.report_visible());
    assert_eq!(workflow.severity(), Some(Severity::Severe));
    assert_eq!(workflow.severity().unwrap().to_string(), "Severe");
    assert_eq!(workflow.preview(), Some("u"));

    workflow.set_description("large crack".to_string());
    assert!(workflow.can_send());
    let report = workflow
        .request_report(session.user_id(), "corr-42".to_string())
        .expect("report should be allowed");
    assert_eq!(report.user_id, "abc123");
    assert_eq!(report.request.message, "large crack");
    assert_eq!(report.request.severity, Severity::Severe);
    assert_eq!(report.request.latitude, 18.52);
    assert_eq!(report.request.longitude, 73.85);

    workflow.report_succeeded();
    assert_eq!(workflow.phase(), UploadPhase::Idle);
    assert!(workflow.file().is_none());
    assert!(workflow.preview().is_none());
    assert!(workflow.description().is_empty());
    assert!(!workflow.report_visible());
    assert_eq!(workflow.status().unwrap().level, NoticeLevel::Success);
    assert_eq!(
        workflow.geolocation().coordinates(),
        Some(Coordinates::new(18.52, 73.85))
    );
}

#[test]
fn negative_detection_never_allows_report() {
    let mut workflow: UploadWorkflow<FakeFile> = UploadWorkflow::new();
    workflow.location_resolved(Coordinates::new(18.52, 73.85));
    workflow.select_image(FakeFile("road.jpg"));
    workflow.request_detection().unwrap();
    workflow.detection_succeeded(
        serde_json::from_str(
            r#"{"potholesDetected": false, "imageUrl": "u", "message": "No potholes found or processed."}"#,
        )
        .unwrap(),
    );
    assert!(!workflow.report_visible());
    workflow.set_description("please fix".to_string());
    assert!(workflow
        .request_report(Some("abc123".to_string()), "t".to_string())
        .is_none());
}

#[test]
fn login_persists_identifier_for_the_guard() {
    let session = Session::in_memory();
    let mut form = LoginForm {
        email: "citizen@urbanfix.in".to_string(),
        password: "secret".to_string(),
        ..Default::default()
    };
    let request = form.submit().expect("valid form");
    assert_eq!(request.email, "citizen@urbanfix.in");

    let response: LoginResponse =
        serde_json::from_str(r#"{"message": "Login successful", "user_id": "abc123"}"#).unwrap();
    session.sign_in(&response.user_id);
    form.succeed();
    assert_eq!(session.user_id().as_deref(), Some("abc123"));

    let mut guard = SessionGuard::new();
    let GuardCommand::Validate { user_id, ticket } = guard.begin(&session) else {
        panic!("stored session must be validated");
    };
    assert_eq!(user_id, "abc123");
    let profile: Profile = serde_json::from_str(
        r#"{"user_id": "abc123", "name": "Asha", "email": "asha@x.org", "role": "user"}"#,
    )
    .unwrap();
    assert_eq!(guard.resolve(ticket, Ok(profile), &session), GuardCommand::Render);
}

#[test]
fn guard_redirects_and_clears_on_rejection() {
    let session = Session::in_memory();
    let mut guard = SessionGuard::new();
    assert_eq!(guard.begin(&session), GuardCommand::Redirect);

    session.sign_in("stale-id");
    let GuardCommand::Validate { ticket, .. } = guard.begin(&session) else {
        panic!("stored session must be validated");
    };
    let outcome = guard.resolve(
        ticket,
        Err(ApiError::from_status(404, r#"{"message": "User not found"}"#)),
        &session,
    );
    assert_eq!(outcome, GuardCommand::Redirect);
    assert_eq!(session.user_id(), None);
}
