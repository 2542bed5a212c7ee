use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Labelled `<input>` reporting its value on every keystroke.
pub fn text_field(label: &str, kind: &'static str, value: &str, on_input: Callback<String>) -> Html {
    let oninput = on_input.reform(|e: InputEvent| e.target_unchecked_into::<HtmlInputElement>().value());
    html! {
        <label class="field">
            <span class="field-label">{ label }</span>
            <input type={kind} value={value.to_string()} {oninput} />
        </label>
    }
}
