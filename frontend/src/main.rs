use crate::app::App;

mod api;
mod app;
mod components;
mod config;
mod geolocation;
mod leaflet;
mod pages;
mod session;

fn main() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    yew::Renderer::<App>::new().render();
}
