//! Rendering of the Upload page. Everything shown is read from the workflow;
//! the view never decides what is allowed.

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use common::workflow::Geolocation;

use crate::components::alert::notice_banner;

use super::messages::Msg;
use super::state::UploadPage;

pub fn view(page: &UploadPage, ctx: &Context<UploadPage>) -> Html {
    let link = ctx.link();
    html! {
        <section class="card upload">
            <h1>{ "Pothole Detection & Reporting" }</h1>
            { build_location_box(page) }
            { build_file_picker(page, link) }
            <button
                class="button primary wide"
                disabled={!page.workflow.can_detect()}
                onclick={link.callback(|_| Msg::Detect)}
            >
                { page.workflow.detect_label() }
            </button>
            { notice_banner(page.workflow.status(), Some(link.callback(|_| Msg::DismissStatus))) }
            { build_preview(page) }
            { build_report_section(page, link) }
        </section>
    }
}

fn build_location_box(page: &UploadPage) -> Html {
    let geolocation = page.workflow.geolocation();
    let (latitude, longitude) = geolocation.display();
    html! {
        <div class="location-box">
            <div>
                { "Location: Lat: " }<strong id="latitude">{ latitude }</strong>
                { ", Long: " }<strong id="longitude">{ longitude }</strong>
            </div>
            {
                match geolocation {
                    Geolocation::Fetching => html! {
                        <small class="muted">{ "Getting location..." }</small>
                    },
                    Geolocation::Unavailable(_) => html! {
                        <small class="error-text">
                            { "Location unavailable. Reporting may be less effective." }
                        </small>
                    },
                    Geolocation::Resolved(_) => html! {},
                }
            }
        </div>
    }
}

fn build_file_picker(page: &UploadPage, link: &Scope<UploadPage>) -> Html {
    let onchange = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::FileChanged(input.files().and_then(|files| files.get(0)))
    });
    html! {
        <label class="field">
            <span class="field-label">{ "Select Pothole Image" }</span>
            <input
                type="file"
                accept="image/jpeg, image/png, image/webp"
                capture="environment"
                ref={page.file_input_ref.clone()}
                disabled={page.workflow.is_busy()}
                {onchange}
            />
        </label>
    }
}

fn build_preview(page: &UploadPage) -> Html {
    let Some(src) = page.workflow.preview() else {
        return html! {};
    };
    html! {
        <figure class="preview">
            <figcaption>{ "Image Preview / Detection Result" }</figcaption>
            <img src={src.to_string()} alt="Pothole preview" />
        </figure>
    }
}

fn build_report_section(page: &UploadPage, link: &Scope<UploadPage>) -> Html {
    if !page.workflow.report_visible() {
        return html! {};
    }
    let oninput = link.callback(|e: InputEvent| {
        let textarea: HtmlTextAreaElement = e.target_unchecked_into();
        Msg::DescriptionChanged(textarea.value())
    });
    html! {
        <div class="report-section">
            <h2>{ "Report to Municipal Corporation" }</h2>
            if let Some(severity) = page.workflow.severity() {
                <p>
                    { "Detected severity: " }
                    <span class={classes!("chip", severity.chip_class())}>{ severity.as_str() }</span>
                </p>
            }
            <label class="field">
                <span class="field-label">{ "Your Message" }</span>
                <textarea
                    rows="4"
                    placeholder="Describe the pothole condition, location accuracy, or any additional details..."
                    value={page.workflow.description().to_string()}
                    disabled={page.workflow.is_busy()}
                    {oninput}
                />
            </label>
            <button
                class="button primary wide"
                disabled={!page.workflow.can_send()}
                onclick={link.callback(|_| Msg::SendReport)}
            >
                { page.workflow.send_label() }
            </button>
        </div>
    }
}
