use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="not-found">
            <h1 class="not-found-code">{ "404" }</h1>
            <h2>{ "Oops! Page Not Found" }</h2>
            <p>{ "The page you are looking for does not exist." }</p>
            <Link<Route> to={Route::Home} classes="button primary">{ "Go to Home" }</Link<Route>>
        </section>
    }
}
