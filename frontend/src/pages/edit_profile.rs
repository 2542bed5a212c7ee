//! Profile editing. The form is pre-filled from the profile the route guard
//! just validated; it is only fetched again when that context is missing.

use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::error::ApiError;
use common::forms::ProfileForm;
use common::model::profile::Profile;
use common::session::Session;

use crate::api::ApiClient;
use crate::app::Route;
use crate::components::alert::notice_banner;
use crate::components::context::{api_of, current_user_of, session_of};
use crate::components::field::text_field;
use crate::config::REDIRECT_DELAY_MS;

pub enum Msg {
    Loaded(Result<Profile, ApiError>),
    NameChanged(String),
    EmailChanged(String),
    Submit,
    Saved(Result<(), ApiError>),
    GoToProfile,
}

pub struct EditProfilePage {
    form: ProfileForm,
    loading: bool,
    session: Session,
    api: ApiClient,
}

impl Component for EditProfilePage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut page = Self {
            form: ProfileForm::default(),
            loading: false,
            session: session_of(ctx),
            api: api_of(ctx),
        };
        match (current_user_of(ctx), page.session.user_id()) {
            (Some(profile), _) => page.form.fill(&profile),
            (None, Some(user_id)) => {
                page.loading = true;
                let api = page.api.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::Loaded(api.get_profile(&user_id).await));
                });
            }
            (None, None) => page.form.load_failed(),
        }
        page
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(result) => {
                self.loading = false;
                match result {
                    Ok(profile) => self.form.fill(&profile),
                    Err(err) => {
                        log::warn!("profile load failed: {}", err);
                        self.form.load_failed();
                    }
                }
            }
            Msg::NameChanged(name) => self.form.name = name,
            Msg::EmailChanged(email) => self.form.email = email,
            Msg::Submit => {
                let Some(user_id) = self.session.user_id() else {
                    self.form.load_failed();
                    return true;
                };
                if let Some(request) = self.form.submit() {
                    let api = self.api.clone();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        let result = api.update_profile(&user_id, &request).await;
                        link.send_message(Msg::Saved(result));
                    });
                }
            }
            Msg::Saved(Ok(())) => {
                self.form.succeed();
                let link = ctx.link().clone();
                spawn_local(async move {
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    link.send_message(Msg::GoToProfile);
                });
            }
            Msg::Saved(Err(err)) => {
                log::warn!("profile update failed: {}", err);
                self.form.fail();
            }
            Msg::GoToProfile => {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Profile);
                }
                return false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        if self.loading {
            return html! { <section class="card"><p>{ "Loading profile..." }</p></section> };
        }
        html! {
            <section class="card auth-card">
                <h1>{ "Edit Profile" }</h1>
                { notice_banner(self.form.notice.as_ref(), None) }
                <form onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}>
                    { text_field("Name", "text", &self.form.name, link.callback(Msg::NameChanged)) }
                    { text_field("Email", "email", &self.form.email, link.callback(Msg::EmailChanged)) }
                    <button type="submit" class="button primary" disabled={self.form.saving}>
                        { if self.form.saving { "Saving..." } else { "Save Changes" } }
                    </button>
                </form>
                <Link<Route> to={Route::Profile} classes="button">{ "Cancel" }</Link<Route>>
            </section>
        }
    }
}
