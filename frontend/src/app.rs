//! Application root: route table, shared services and the router outlet.

use yew::{html, Component, Context, ContextProvider, Html};
use yew_router::prelude::*;

use common::session::Session;

use crate::api::ApiClient;
use crate::components::layout::Layout;
use crate::components::protected_route::ProtectedRoute;
use crate::pages::{
    create_profile::CreateProfilePage, edit_profile::EditProfilePage, home::HomePage,
    login::LoginPage, map::MapPage, not_found::NotFoundPage, profile::ProfilePage,
    track::TrackPage, upload::UploadPage,
};
use crate::session::browser_session;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/create-profile")]
    CreateProfile,
    #[at("/profile")]
    Profile,
    #[at("/edit-profile")]
    EditProfile,
    #[at("/upload")]
    Upload,
    #[at("/track")]
    Track,
    #[at("/map")]
    Map,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    let page = match &route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::CreateProfile => html! { <CreateProfilePage /> },
        Route::Map => html! { <MapPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
        Route::Profile => html! {
            <ProtectedRoute route={route.clone()}><ProfilePage /></ProtectedRoute>
        },
        Route::EditProfile => html! {
            <ProtectedRoute route={route.clone()}><EditProfilePage /></ProtectedRoute>
        },
        Route::Upload => html! {
            <ProtectedRoute route={route.clone()}><UploadPage /></ProtectedRoute>
        },
        Route::Track => html! {
            <ProtectedRoute route={route.clone()}><TrackPage /></ProtectedRoute>
        },
    };
    html! { <Layout>{ page }</Layout> }
}

/// Owns the session handle and the API client and hands both down as
/// contexts, so pages never reach for globals.
pub struct App {
    session: Session,
    api: ApiClient,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: browser_session(),
            api: ApiClient::default(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<Session> context={self.session.clone()}>
                <ContextProvider<ApiClient> context={self.api.clone()}>
                    <BrowserRouter>
                        <Switch<Route> render={switch} />
                    </BrowserRouter>
                </ContextProvider<ApiClient>>
            </ContextProvider<Session>>
        }
    }
}
