//! Track page: the signed-in user's complaints with progress, counts and a
//! map of the reported locations.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::ApiError;
use common::model::complaint::ComplaintRecord;
use common::model::severity::Severity;
use common::notice::Notice;
use common::tracking::{format_date, popup_html, ComplaintStats, TrackingProgress, TRACKING_STEPS};

use crate::components::alert::notice_banner;
use crate::components::context::{api_of, session_of};
use crate::components::map_view::{MapView, Marker};
use crate::components::stat_card::stat_card;

pub enum Msg {
    Loaded(Result<Vec<ComplaintRecord>, ApiError>),
    DismissError,
}

pub struct TrackPage {
    complaints: Vec<ComplaintRecord>,
    stats: ComplaintStats,
    markers: Vec<Marker>,
    loading: bool,
    error: Option<Notice>,
}

fn markers_for(complaints: &[ComplaintRecord]) -> Vec<Marker> {
    complaints
        .iter()
        .filter_map(|complaint| {
            let coordinates = complaint.coordinates()?;
            let severity = complaint.severity.unwrap_or(Severity::Unknown);
            Some(Marker {
                coordinates,
                severity,
                popup_html: popup_html(
                    complaint.status().label(),
                    severity,
                    complaint.timestamp.as_deref(),
                ),
            })
        })
        .collect()
}

impl Component for TrackPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut page = Self {
            complaints: Vec::new(),
            stats: ComplaintStats::default(),
            markers: Vec::new(),
            loading: false,
            error: None,
        };
        match session_of(ctx).user_id() {
            Some(user_id) => {
                page.loading = true;
                let api = api_of(ctx);
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Loaded(api.list_complaints(&user_id).await));
                });
            }
            None => {
                page.error = Some(Notice::error(
                    "Failed to fetch complaints. Please try again later.",
                ));
            }
        }
        page
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(Ok(complaints)) => {
                log::debug!("loaded {} complaints", complaints.len());
                self.loading = false;
                self.stats = ComplaintStats::from_complaints(&complaints);
                self.markers = markers_for(&complaints);
                self.complaints = complaints;
            }
            Msg::Loaded(Err(err)) => {
                log::error!("complaint listing failed: {}", err);
                self.loading = false;
                self.error = Some(Notice::error(
                    "Failed to fetch complaints. Please try again later.",
                ));
            }
            Msg::DismissError => self.error = None,
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_dismiss = ctx.link().callback(|_| Msg::DismissError);
        html! {
            <section class="track">
                <h1>{ "Your Complaint Tracking" }</h1>
                { notice_banner(self.error.as_ref(), Some(on_dismiss)) }
                <div class="stat-grid">
                    { stat_card("Total Complaints", self.stats.total, "accent-primary") }
                    { stat_card("Completed", self.stats.completed, "accent-success") }
                    { stat_card("Pending", self.stats.pending, "accent-warning") }
                    { stat_card("Rejected", self.stats.rejected, "accent-error") }
                </div>
                { self.view_body() }
            </section>
        }
    }
}

impl TrackPage {
    fn view_body(&self) -> Html {
        if self.loading {
            return html! {
                <div class="loading-block">
                    <div class="spinner" />
                    <p>{ "Loading your complaints..." }</p>
                </div>
            };
        }
        if self.complaints.is_empty() {
            if self.error.is_some() {
                return html! {};
            }
            return html! {
                <div class="card empty-state">
                    <h2>{ "No Complaints Found" }</h2>
                    <p>{ "You haven't submitted any pothole complaints yet." }</p>
                </div>
            };
        }
        html! {
            <>
                if !self.markers.is_empty() {
                    <MapView markers={self.markers.clone()} fit_markers={true} />
                }
                <div class="complaint-list">
                    { for self.complaints.iter().enumerate().map(|(i, c)| complaint_card(i, c)) }
                </div>
            </>
        }
    }
}

fn complaint_card(index: usize, complaint: &ComplaintRecord) -> Html {
    let status = complaint.status();
    let progress = TrackingProgress::of(&status);
    let location = match (complaint.latitude, complaint.longitude) {
        (Some(lat), Some(lng)) => format!("{}, {}", lat, lng),
        _ => "N/A".to_string(),
    };

    html! {
        <article class={progress.card_class()}>
            <header class="complaint-header">
                <h3>{ format!("Complaint #{}", complaint.display_id(index)) }</h3>
                <span class={classes!("chip", status.chip_class())}>{ status.label() }</span>
            </header>
            <div class="complaint-body">
                <div class="complaint-info">
                    <p><span>{ "Location: " }</span><strong>{ location }</strong></p>
                    <p>
                        <span>{ "Submitted: " }</span>
                        <strong>{ format_date(complaint.timestamp.as_deref()) }</strong>
                    </p>
                    if let Some(severity) = complaint.severity {
                        <p>
                            <span>{ "Severity: " }</span>
                            <span class={classes!("chip", severity.chip_class())}>{ severity.as_str() }</span>
                        </p>
                    }
                    <p class="complaint-description">
                        <strong>{ "Description:" }</strong><br />
                        { complaint.description() }
                    </p>
                </div>
                <div class="complaint-progress">
                    <h4>{ "Complaint Status" }</h4>
                    if progress.rejected {
                        <div class="alert alert-error">
                            { "This complaint was rejected by municipal authorities." }
                        </div>
                    }
                    <ol class={classes!("stepper", progress.rejected.then_some("muted"))}>
                        { for TRACKING_STEPS.iter().enumerate().map(|(step, label)| {
                            let state = match progress.active_step {
                                Some(active) if step < active => "done",
                                Some(active) if step == active => "active",
                                _ => "todo",
                            };
                            html! { <li class={classes!("step", state)}>{ *label }</li> }
                        }) }
                    </ol>
                </div>
            </div>
            if let Some(image_url) = complaint.image_url.as_ref() {
                <figure class="complaint-image">
                    <figcaption>{ "Reported Image:" }</figcaption>
                    <img src={image_url.clone()} alt="Pothole" />
                </figure>
            }
        </article>
    }
}
