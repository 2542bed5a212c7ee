use yew::prelude::*;
use yew_router::prelude::*;

use common::model::profile::Profile;
use common::session::Session;

use crate::app::Route;
use crate::components::context::{current_user_of, session_of};
use crate::components::toast::show_toast;

pub enum Msg {
    Logout,
}

/// Account overview for the signed-in user.
pub struct ProfilePage {
    profile: Option<Profile>,
    session: Session,
}

impl Component for ProfilePage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            profile: current_user_of(ctx),
            session: session_of(ctx),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Logout => {
                self.session.sign_out();
                show_toast("You have been logged out.");
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Login);
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let Some(profile) = &self.profile else {
            return html! { <section class="card"><p>{ "Loading profile..." }</p></section> };
        };
        html! {
            <section class="card profile">
                <h1>{ format!("Welcome, {}", profile.name) }</h1>
                <dl class="profile-details">
                    <dt>{ "User ID" }</dt><dd>{ &profile.user_id }</dd>
                    <dt>{ "Email" }</dt><dd>{ &profile.email }</dd>
                    <dt>{ "Role" }</dt><dd>{ &profile.role }</dd>
                </dl>
                <div class="profile-actions">
                    <Link<Route> to={Route::EditProfile} classes="button">{ "Edit Profile" }</Link<Route>>
                    <button class="button danger" onclick={ctx.link().callback(|_| Msg::Logout)}>
                        { "Logout" }
                    </button>
                </div>
            </section>
        }
    }
}
