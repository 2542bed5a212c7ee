use num_format::{Locale, ToFormattedString};
use yew::prelude::*;

/// Summary tile used above the complaint list and beside the map.
pub fn stat_card(title: &str, value: usize, accent: &str) -> Html {
    html! {
        <div class={classes!("stat-card", accent.to_string())}>
            <span class="stat-value">{ value.to_formatted_string(&Locale::en) }</span>
            <span class="stat-title">{ title }</span>
        </div>
    }
}
