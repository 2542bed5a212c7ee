//! Page chrome: the sticky header with the navigation menu and the main
//! content area.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

const NAV_ITEMS: [(&str, Route); 5] = [
    ("Home", Route::Home),
    ("Report Pothole", Route::Upload),
    ("View Map", Route::Map),
    ("Track Report", Route::Track),
    ("Profile", Route::Profile),
];

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    #[prop_or_default]
    pub children: Html,
}

pub enum Msg {
    ToggleMenu,
    CloseMenu,
}

pub struct Layout {
    menu_open: bool,
}

impl Component for Layout {
    type Message = Msg;
    type Properties = LayoutProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self { menu_open: false }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleMenu => self.menu_open = !self.menu_open,
            Msg::CloseMenu => {
                if !self.menu_open {
                    return false;
                }
                self.menu_open = false;
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let current = link.route::<Route>();
        let nav_class = classes!("nav-links", self.menu_open.then_some("open"));

        html! {
            <>
                <header class="site-header">
                    <Link<Route> to={Route::Home} classes="brand">{ "UrbanFix" }</Link<Route>>
                    <button
                        class="menu-toggle"
                        aria-label="Toggle navigation"
                        onclick={link.callback(|_| Msg::ToggleMenu)}
                    >
                        { if self.menu_open { "✕" } else { "☰" } }
                    </button>
                    <nav class={nav_class} onclick={link.callback(|_| Msg::CloseMenu)}>
                        { for NAV_ITEMS.iter().map(|(label, route)| {
                            let active = current.as_ref() == Some(route);
                            html! {
                                <Link<Route>
                                    to={route.clone()}
                                    classes={classes!("nav-link", active.then_some("active"))}
                                >
                                    { *label }
                                </Link<Route>>
                            }
                        }) }
                    </nav>
                </header>
                <main class="page">
                    { ctx.props().children.clone() }
                </main>
            </>
        }
    }
}
