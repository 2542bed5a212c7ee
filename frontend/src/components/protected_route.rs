//! Route guard for pages that need a signed-in user.
//!
//! On every navigation to a protected route the stored session identifier is
//! re-validated against the backend before the page renders:
//! - no identifier: redirect to `/login` straight away;
//! - profile fetched: render the page, with the profile provided as
//!   [`CurrentUser`] context;
//! - any failure (404, 5xx, network): clear the session and redirect.
//!
//! Answers that arrive after the user navigated elsewhere are dropped by the
//! ticket check in [`SessionGuard`].

use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use common::error::ApiError;
use common::model::profile::Profile;
use common::session::{GuardCommand, GuardState, Session, SessionGuard};

use crate::api::ApiClient;
use crate::app::Route;
use crate::components::context::{api_of, session_of, CurrentUser};
use crate::components::toast::show_toast;

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    /// Route being guarded; a change re-runs the validation.
    pub route: Route,
    #[prop_or_default]
    pub children: Html,
}

pub enum Msg {
    Validated {
        ticket: u64,
        result: Result<Profile, ApiError>,
    },
}

pub struct ProtectedRoute {
    guard: SessionGuard,
    session: Session,
    api: ApiClient,
    redirect_pending: bool,
}

impl ProtectedRoute {
    fn evaluate(&mut self, ctx: &Context<Self>) {
        match self.guard.begin(&self.session) {
            GuardCommand::Validate { user_id, ticket } => {
                let api = self.api.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = api.get_profile(&user_id).await;
                    link.send_message(Msg::Validated { ticket, result });
                });
            }
            GuardCommand::Redirect => self.redirect_pending = true,
            GuardCommand::Render | GuardCommand::None => {}
        }
    }

    fn redirect(&mut self, ctx: &Context<Self>) {
        self.redirect_pending = false;
        show_toast("Please log in to continue.");
        match ctx.link().navigator() {
            Some(navigator) => navigator.replace(&Route::Login),
            None => log::error!("route guard rendered outside of a router"),
        }
    }
}

impl Component for ProtectedRoute {
    type Message = Msg;
    type Properties = ProtectedRouteProps;

    fn create(ctx: &Context<Self>) -> Self {
        let mut guard = Self {
            guard: SessionGuard::new(),
            session: session_of(ctx),
            api: api_of(ctx),
            redirect_pending: false,
        };
        guard.evaluate(ctx);
        guard
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Validated { ticket, result } => {
                match self.guard.resolve(ticket, result, &self.session) {
                    GuardCommand::Render => true,
                    GuardCommand::Redirect => {
                        self.redirect(ctx);
                        true
                    }
                    GuardCommand::None | GuardCommand::Validate { .. } => false,
                }
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().route != old_props.route {
            self.evaluate(ctx);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match self.guard.state() {
            GuardState::Pending => html! {
                <div class="guard-loading">
                    <div class="spinner" />
                    <p>{ "Checking your session..." }</p>
                </div>
            },
            GuardState::Authorized(profile) => html! {
                <ContextProvider<CurrentUser> context={CurrentUser(profile.clone())}>
                    { ctx.props().children.clone() }
                </ContextProvider<CurrentUser>>
            },
            GuardState::Unauthorized => html! {},
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if self.redirect_pending {
            self.redirect(ctx);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.guard.cancel();
    }
}
