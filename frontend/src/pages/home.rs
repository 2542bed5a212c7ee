use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <section class="card home">
            <h1>{ "Welcome to UrbanFix" }</h1>
            <p>
                { "Our system detects potholes and reports them to the nearest Municipal \
                   Corporation. We also track the complaints to ensure they are addressed \
                   promptly." }
            </p>
            <p>
                { "By using our platform, you can help improve the quality of roads in your \
                   area and ensure a safer driving experience for everyone." }
            </p>
            <p>
                { "Simply upload a photo of the pothole, and our system will take care of the \
                   rest. You can also view the history of your complaints and track their status." }
            </p>
            <p class="tagline">{ "Together, we can make our roads better!" }</p>
            <div class="home-actions">
                <Link<Route> to={Route::Upload} classes="button primary">{ "Report a Pothole" }</Link<Route>>
                <Link<Route> to={Route::Map} classes="button">{ "View Map" }</Link<Route>>
                <Link<Route> to={Route::Track} classes="button">{ "Track Report" }</Link<Route>>
            </div>
        </section>
    }
}
