//! Accessors for the services provided by `App` and `ProtectedRoute`.
//!
//! Pages read contexts once, at creation; none of these values change for the
//! lifetime of a page.

use yew::{Callback, Component, Context};

use common::model::profile::Profile;
use common::session::Session;

use crate::api::ApiClient;
use crate::session::browser_session;

/// Profile validated by the route guard for the current protected page.
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentUser(pub Profile);

pub fn session_of<C: Component>(ctx: &Context<C>) -> Session {
    ctx.link()
        .context::<Session>(Callback::from(|_| ()))
        .map(|(session, _)| session)
        .unwrap_or_else(browser_session)
}

pub fn api_of<C: Component>(ctx: &Context<C>) -> ApiClient {
    ctx.link()
        .context::<ApiClient>(Callback::from(|_| ()))
        .map(|(api, _)| api)
        .unwrap_or_default()
}

pub fn current_user_of<C: Component>(ctx: &Context<C>) -> Option<Profile> {
    ctx.link()
        .context::<CurrentUser>(Callback::from(|_| ()))
        .map(|(CurrentUser(profile), _)| profile)
}
