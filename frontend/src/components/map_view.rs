//! Leaflet map widget with one circle marker per pothole.

use web_sys::HtmlElement;
use yew::prelude::*;

use common::model::coordinates::Coordinates;
use common::model::severity::Severity;

use crate::leaflet::PotholeMap;

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub coordinates: Coordinates,
    pub severity: Severity,
    /// Popup body, already escaped.
    pub popup_html: String,
}

#[derive(Properties, PartialEq)]
pub struct MapViewProps {
    pub markers: Vec<Marker>,
    /// Zoom to the markers instead of keeping the regional default view.
    #[prop_or(false)]
    pub fit_markers: bool,
}

pub struct MapView {
    node: NodeRef,
    map: Option<PotholeMap>,
    mount_failed: bool,
}

impl MapView {
    fn draw_markers(&self, ctx: &Context<Self>) {
        let Some(map) = &self.map else {
            return;
        };
        map.clear_markers();
        let props = ctx.props();
        for marker in &props.markers {
            if let Err(err) = map.add_marker(
                marker.coordinates,
                marker.severity.marker_color(),
                &marker.popup_html,
            ) {
                log::warn!("could not place marker: {:?}", err);
            }
        }
        if props.fit_markers {
            let points: Vec<Coordinates> = props.markers.iter().map(|m| m.coordinates).collect();
            map.fit_to(&points);
        }
    }
}

impl Component for MapView {
    type Message = ();
    type Properties = MapViewProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            node: NodeRef::default(),
            map: None,
            mount_failed: false,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().markers != old_props.markers {
            self.draw_markers(ctx);
        }
        false
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="map-frame">
                <div class="map-canvas" ref={self.node.clone()} />
                if self.mount_failed {
                    <p class="map-fallback">{ "Map could not be loaded." }</p>
                }
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let Some(element) = self.node.cast::<HtmlElement>() else {
            return;
        };
        match PotholeMap::mount(&element) {
            Ok(map) => {
                self.map = Some(map);
                self.draw_markers(ctx);
            }
            Err(err) => {
                log::error!("leaflet unavailable: {:?}", err);
                self.mount_failed = true;
                ctx.link().send_message(());
            }
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, _msg: Self::Message) -> bool {
        true
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.map.take();
    }
}
