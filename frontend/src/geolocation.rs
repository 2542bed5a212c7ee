//! One-shot device position lookup through `navigator.geolocation`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{GeolocationPosition, GeolocationPositionError, PositionOptions};
use yew::Callback;

use common::model::coordinates::Coordinates;

use crate::config::{GEO_MAXIMUM_AGE_MS, GEO_TIMEOUT_MS};

/// Requests the current position (high accuracy, 10 s timeout, cached fixes
/// up to a minute old) and reports exactly once through one of the callbacks.
/// `on_error` receives the browser's reason text.
pub fn locate(on_success: Callback<Coordinates>, on_error: Callback<String>) {
    let Some(geolocation) = web_sys::window().and_then(|w| w.navigator().geolocation().ok())
    else {
        on_error.emit("Geolocation is not supported by this browser".to_string());
        return;
    };

    let success_error = on_error.clone();
    let success = Closure::once_into_js(move |position: JsValue| {
        match position.dyn_into::<GeolocationPosition>() {
            Ok(position) => {
                let coords = position.coords();
                on_success.emit(Coordinates::new(coords.latitude(), coords.longitude()));
            }
            Err(_) => success_error.emit("Unexpected position payload".to_string()),
        }
    });

    let failure_error = on_error.clone();
    let failure = Closure::once_into_js(move |error: JsValue| {
        let reason = error
            .dyn_into::<GeolocationPositionError>()
            .map(|e| e.message())
            .unwrap_or_else(|_| "Unknown error".to_string());
        log::warn!("geolocation failed: {}", reason);
        failure_error.emit(reason);
    });

    let options = PositionOptions::new();
    options.set_enable_high_accuracy(true);
    options.set_timeout(GEO_TIMEOUT_MS);
    options.set_maximum_age(GEO_MAXIMUM_AGE_MS);

    if let Err(err) = geolocation.get_current_position_with_error_callback_and_options(
        success.unchecked_ref(),
        Some(failure.unchecked_ref()),
        &options,
    ) {
        log::error!("geolocation request rejected: {:?}", err);
        on_error.emit("Geolocation request was rejected".to_string());
    }
}
