//! Login page.
//!
//! A stored session is checked on arrival: when the backend still knows the
//! identifier the user goes straight to the profile, otherwise the stale
//! value is dropped and the form is shown.

use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::error::ApiError;
use common::forms::LoginForm;
use common::model::profile::Profile;
use common::requests::LoginResponse;
use common::session::Session;

use crate::api::ApiClient;
use crate::app::Route;
use crate::components::alert::notice_banner;
use crate::components::context::{api_of, session_of};
use crate::components::field::text_field;

pub enum Msg {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    LoginFinished(Result<LoginResponse, ApiError>),
    ExistingSession(Result<Profile, ApiError>),
}

pub struct LoginPage {
    form: LoginForm,
    session: Session,
    api: ApiClient,
}

impl Component for LoginPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let page = Self {
            form: LoginForm::default(),
            session: session_of(ctx),
            api: api_of(ctx),
        };
        if let Some(user_id) = page.session.user_id() {
            let api = page.api.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::ExistingSession(api.get_profile(&user_id).await));
            });
        }
        page
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::EmailChanged(email) => self.form.email = email,
            Msg::PasswordChanged(password) => self.form.password = password,
            Msg::Submit => {
                if let Some(request) = self.form.submit() {
                    let api = self.api.clone();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        link.send_message(Msg::LoginFinished(api.login(&request).await));
                    });
                }
            }
            Msg::LoginFinished(Ok(response)) => {
                log::info!("signed in as {}", response.user_id);
                self.session.sign_in(&response.user_id);
                self.form.succeed();
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Profile);
                }
            }
            Msg::LoginFinished(Err(err)) => {
                log::warn!("login failed: {}", err);
                self.form.fail(&err);
            }
            Msg::ExistingSession(Ok(_)) => {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Profile);
                }
                return false;
            }
            Msg::ExistingSession(Err(err)) => {
                log::debug!("stored session rejected: {}", err);
                self.session.sign_out();
                return false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <section class="card auth-card">
                <h1>{ "UrbanFix Login" }</h1>
                { notice_banner(self.form.notice.as_ref(), None) }
                <form onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}>
                    { text_field("Email", "email", &self.form.email, link.callback(Msg::EmailChanged)) }
                    { text_field("Password", "password", &self.form.password, link.callback(Msg::PasswordChanged)) }
                    <button type="submit" class="button primary" disabled={self.form.loading}>
                        { if self.form.loading { "Logging in..." } else { "Login" } }
                    </button>
                </form>
                <p class="auth-switch">
                    { "Don't have an account? " }
                    <Link<Route> to={Route::CreateProfile}>{ "Create Profile" }</Link<Route>>
                </p>
            </section>
        }
    }
}
