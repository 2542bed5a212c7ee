use yew::prelude::*;

use common::notice::Notice;

/// Renders a notice as an alert box; nothing when there is no notice.
/// A close button is shown when `on_dismiss` is given.
pub fn notice_banner(notice: Option<&Notice>, on_dismiss: Option<Callback<MouseEvent>>) -> Html {
    let Some(notice) = notice else {
        return html! {};
    };
    html! {
        <div class={notice.level.css_class()} role="alert">
            <span>{ &notice.text }</span>
            if let Some(on_dismiss) = on_dismiss {
                <button class="alert-close" aria-label="Dismiss" onclick={on_dismiss}>{ "×" }</button>
            }
        </div>
    }
}
