//! Upload page: pick a photo, run pothole detection on it and send the
//! result to the municipal corporation.
//!
//! The page is a thin shell around `common::workflow::UploadWorkflow`, which
//! decides what is shown and which requests may go out. This module wires the
//! Yew `Component` to the workflow:
//! - `state` holds the workflow plus DOM refs and services;
//! - `update` executes the commands the workflow hands back and feeds the
//!   outcomes in as messages;
//! - `view` renders the workflow's current state;
//! - `helpers` reads the local preview of the chosen image.

use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::UploadPage;

use crate::geolocation::locate;

impl Component for UploadPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let page = UploadPage::new(ctx);
        locate(
            ctx.link().callback(Msg::LocationResolved),
            ctx.link().callback(Msg::LocationFailed),
        );
        page
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
