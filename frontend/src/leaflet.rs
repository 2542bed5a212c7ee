//! Minimal bindings to the global Leaflet (`L`) loaded by `index.html`, and a
//! small owner type for the map widget shared by the Track and Map pages.
//!
//! Constructors are bound with `catch` so a missing or broken Leaflet script
//! surfaces as an error instead of trapping the whole app.

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use common::model::coordinates::Coordinates;

use crate::config::{MAP_CENTER, MAP_ZOOM, TILE_ATTRIBUTION, TILE_URL};

#[wasm_bindgen]
extern "C" {
    type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn create_map(element: &HtmlElement) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64);

    #[wasm_bindgen(method, js_name = fitBounds)]
    fn fit_bounds(this: &LeafletMap, bounds: &JsValue, options: &JsValue);

    #[wasm_bindgen(method)]
    fn remove(this: &LeafletMap);

    type Layer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    fn tile_layer(url: &str, options: &JsValue) -> Result<Layer, JsValue>;

    #[wasm_bindgen(catch, js_namespace = L, js_name = circleMarker)]
    fn circle_marker(lat_lng: &JsValue, options: &JsValue) -> Result<Layer, JsValue>;

    #[wasm_bindgen(catch, js_namespace = L, js_name = layerGroup)]
    fn layer_group() -> Result<Layer, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &Layer, map: &LeafletMap);

    #[wasm_bindgen(method, js_name = addLayer)]
    fn add_layer(this: &Layer, layer: &Layer);

    #[wasm_bindgen(method, js_name = bindPopup)]
    fn bind_popup(this: &Layer, content: &str);

    #[wasm_bindgen(method, js_name = clearLayers)]
    fn clear_layers(this: &Layer);
}

fn lat_lng(latitude: f64, longitude: f64) -> JsValue {
    Array::of2(&JsValue::from_f64(latitude), &JsValue::from_f64(longitude)).into()
}

fn options(entries: &[(&str, JsValue)]) -> JsValue {
    let object = Object::new();
    for (key, value) in entries {
        let _ = Reflect::set(&object, &JsValue::from_str(key), value);
    }
    object.into()
}

/// A Leaflet map with an OpenStreetMap base layer and one marker layer.
/// The map is torn down when the value is dropped.
pub struct PotholeMap {
    map: LeafletMap,
    markers: Layer,
}

impl PotholeMap {
    pub fn mount(element: &HtmlElement) -> Result<Self, JsValue> {
        let map = create_map(element)?;
        map.set_view(&lat_lng(MAP_CENTER[0], MAP_CENTER[1]), MAP_ZOOM);

        let tiles = tile_layer(
            TILE_URL,
            &options(&[
                ("attribution", JsValue::from_str(TILE_ATTRIBUTION)),
                ("maxZoom", JsValue::from_f64(19.0)),
            ]),
        )?;
        tiles.add_to(&map);

        let markers = layer_group()?;
        markers.add_to(&map);
        Ok(Self { map, markers })
    }

    pub fn clear_markers(&self) {
        self.markers.clear_layers();
    }

    /// Adds a filled circle marker with an HTML popup.
    pub fn add_marker(&self, at: Coordinates, color: &str, popup_html: &str) -> Result<(), JsValue> {
        let marker = circle_marker(
            &lat_lng(at.latitude, at.longitude),
            &options(&[
                ("radius", JsValue::from_f64(8.0)),
                ("fillColor", JsValue::from_str(color)),
                ("color", JsValue::from_str("#000")),
                ("weight", JsValue::from_f64(1.0)),
                ("opacity", JsValue::from_f64(1.0)),
                ("fillOpacity", JsValue::from_f64(0.8)),
            ]),
        )?;
        marker.bind_popup(popup_html);
        self.markers.add_layer(&marker);
        Ok(())
    }

    /// Zooms to show every point; keeps the default view when there are none.
    pub fn fit_to(&self, points: &[Coordinates]) {
        if points.is_empty() {
            return;
        }
        let bounds: Array = points
            .iter()
            .map(|p| lat_lng(p.latitude, p.longitude))
            .collect();
        let padding = lat_lng(24.0, 24.0);
        self.map.fit_bounds(
            &bounds.into(),
            &options(&[("padding", padding), ("maxZoom", JsValue::from_f64(15.0))]),
        );
    }
}

impl Drop for PotholeMap {
    fn drop(&mut self) {
        self.map.remove();
    }
}
