use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::error::ApiError;
use common::forms::RegisterForm;

use crate::api::ApiClient;
use crate::app::Route;
use crate::components::alert::notice_banner;
use crate::components::context::api_of;
use crate::components::field::text_field;
use crate::config::REDIRECT_DELAY_MS;

pub enum Msg {
    NameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    Registered(Result<(), ApiError>),
    GoToLogin,
}

/// Account creation; on success the user is sent to the login page after a
/// short delay.
pub struct CreateProfilePage {
    form: RegisterForm,
    api: ApiClient,
}

impl Component for CreateProfilePage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            form: RegisterForm::default(),
            api: api_of(ctx),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::NameChanged(name) => self.form.name = name,
            Msg::EmailChanged(email) => self.form.email = email,
            Msg::PasswordChanged(password) => self.form.password = password,
            Msg::Submit => {
                if let Some(request) = self.form.submit() {
                    let api = self.api.clone();
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        link.send_message(Msg::Registered(api.register(&request).await));
                    });
                }
            }
            Msg::Registered(Ok(())) => {
                log::info!("profile created");
                self.form.succeed();
                let link = ctx.link().clone();
                spawn_local(async move {
                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    link.send_message(Msg::GoToLogin);
                });
            }
            Msg::Registered(Err(err)) => {
                log::warn!("registration failed: {}", err);
                self.form.fail(&err);
            }
            Msg::GoToLogin => {
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Login);
                }
                return false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <section class="card auth-card">
                <h1>{ "Create Profile" }</h1>
                { notice_banner(self.form.notice.as_ref(), None) }
                <form onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}>
                    { text_field("Name", "text", &self.form.name, link.callback(Msg::NameChanged)) }
                    { text_field("Email", "email", &self.form.email, link.callback(Msg::EmailChanged)) }
                    { text_field("Password", "password", &self.form.password, link.callback(Msg::PasswordChanged)) }
                    <button type="submit" class="button primary" disabled={self.form.loading}>
                        { if self.form.loading { "Creating..." } else { "Create Profile" } }
                    </button>
                </form>
                <p class="auth-switch">
                    { "Already have an account? " }
                    <Link<Route> to={Route::Login}>{ "Login" }</Link<Route>>
                </p>
            </section>
        }
    }
}
