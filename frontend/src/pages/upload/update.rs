//! Message handling for the Upload page.
//!
//! Every request goes through the workflow first: when it hands back a
//! command the call is spawned and its outcome comes back as a `*Finished`
//! message; when it does not, the workflow has already set the notice that
//! explains why.

use uuid::Uuid;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::helpers::read_data_url;
use super::messages::Msg;
use super::state::UploadPage;

pub fn update(page: &mut UploadPage, ctx: &Context<UploadPage>, msg: Msg) -> bool {
    match msg {
        Msg::LocationResolved(coordinates) => {
            log::debug!(
                "located at {}, {}",
                coordinates.latitude,
                coordinates.longitude
            );
            page.workflow.location_resolved(coordinates);
        }
        Msg::LocationFailed(reason) => page.workflow.location_failed(&reason),
        Msg::FileChanged(Some(file)) => {
            let Some(selection) = page.workflow.select_image(file.clone()) else {
                return true;
            };
            let link = ctx.link().clone();
            spawn_local(async move {
                if let Some(data_url) = read_data_url(file).await {
                    link.send_message(Msg::PreviewReady {
                        selection,
                        data_url,
                    });
                }
            });
        }
        Msg::FileChanged(None) => page.workflow.clear_selection(),
        Msg::PreviewReady {
            selection,
            data_url,
        } => page.workflow.set_preview(selection, data_url),
        Msg::Detect => {
            if let Some(command) = page.workflow.request_detection() {
                log::info!("uploading {} for detection", command.file.name());
                let api = page.api.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api.detect(&command.file, &command.fields).await;
                    link.send_message(Msg::DetectFinished(result));
                });
            }
        }
        Msg::DetectFinished(Ok(result)) => {
            log::info!(
                "detection finished: detected={} count={:?}",
                result.potholes_detected,
                result.detections_count
            );
            page.workflow.detection_succeeded(result);
        }
        Msg::DetectFinished(Err(err)) => {
            log::error!("detection failed: {}", err);
            page.workflow.detection_failed(&err);
        }
        Msg::DescriptionChanged(text) => page.workflow.set_description(text),
        Msg::SendReport => {
            let token = Uuid::new_v4().to_string();
            if let Some(command) = page.workflow.request_report(page.session.user_id(), token) {
                let api = page.api.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api.submit_complaint(&command).await;
                    link.send_message(Msg::ReportFinished(result));
                });
            }
        }
        Msg::ReportFinished(Ok(ack)) => {
            log::info!(
                "complaint submitted (id {:?}): {}",
                ack.complaint_id,
                ack.message.as_deref().unwrap_or("no message")
            );
            page.workflow.report_succeeded();
            page.reset_file_input();
        }
        Msg::ReportFinished(Err(err)) => {
            log::error!("report failed: {}", err);
            page.workflow.report_failed(&err);
        }
        Msg::DismissStatus => page.workflow.dismiss_status(),
    }
    true
}
