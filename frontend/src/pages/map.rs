//! Public pothole map with a severity breakdown.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::error::ApiError;
use common::model::location::MapLocation;
use common::model::severity::Severity;
use common::notice::Notice;
use common::tracking::{popup_html, MapStats};

use crate::components::alert::notice_banner;
use crate::components::context::api_of;
use crate::components::map_view::{MapView, Marker};
use crate::components::stat_card::stat_card;

pub enum Msg {
    Loaded(Result<Vec<MapLocation>, ApiError>),
}

pub struct MapPage {
    stats: MapStats,
    markers: Vec<Marker>,
    loading: bool,
    error: Option<Notice>,
}

impl Component for MapPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let api = api_of(ctx);
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::Loaded(api.list_locations().await));
        });
        Self {
            stats: MapStats::default(),
            markers: Vec::new(),
            loading: true,
            error: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        self.loading = false;
        match msg {
            Msg::Loaded(Ok(locations)) => {
                self.stats = MapStats::from_locations(&locations);
                self.markers = locations
                    .iter()
                    .filter_map(|location| {
                        Some(Marker {
                            coordinates: location.coordinates()?,
                            severity: location.severity(),
                            popup_html: popup_html(
                                location.status_label(),
                                location.severity(),
                                location.timestamp.as_deref(),
                            ),
                        })
                    })
                    .collect();
                log::debug!(
                    "{} locations, {} placed on the map",
                    locations.len(),
                    self.markers.len()
                );
            }
            Msg::Loaded(Err(err)) => {
                log::error!("location listing failed: {}", err);
                self.error = Some(Notice::error("Failed to load pothole locations"));
            }
        }
        true
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <section class="map-page">
                <h1>{ "Pothole Management Dashboard" }</h1>
                { notice_banner(self.error.as_ref(), None) }
                <div class="stat-grid">
                    { stat_card("Total Potholes", self.stats.total, "accent-primary") }
                    { stat_card("Fixed", self.stats.fixed, "accent-success") }
                    { stat_card("Pending", self.stats.pending, "accent-warning") }
                </div>
                <div class="map-layout">
                    <div class="card map-card">
                        <h2>{ "Pothole Map" }</h2>
                        <div class="map-holder">
                            <MapView markers={self.markers.clone()} />
                            if self.loading {
                                <div class="map-overlay"><div class="spinner" /></div>
                            }
                        </div>
                    </div>
                    <aside class="card severity-breakdown">
                        <h2>{ "Severity Breakdown" }</h2>
                        { severity_row(Severity::Severe, self.stats.severe, self.stats.total) }
                        { severity_row(Severity::Moderate, self.stats.moderate, self.stats.total) }
                        { severity_row(Severity::Minor, self.stats.minor, self.stats.total) }
                        { severity_row(Severity::Unknown, self.stats.unknown, self.stats.total) }
                    </aside>
                </div>
            </section>
        }
    }
}

fn severity_row(severity: Severity, count: usize, total: usize) -> Html {
    let percent = if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    };
    let bar_style = format!(
        "width: {:.1}%; background: {};",
        percent,
        severity.marker_color()
    );
    html! {
        <div class="severity-row">
            <div class="severity-row-head">
                <span>{ severity.as_str() }</span>
                <strong>{ count }</strong>
            </div>
            <div class="severity-bar"><div class="severity-bar-fill" style={bar_style} /></div>
        </div>
    }
}
