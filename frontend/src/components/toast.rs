use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Shows a short-lived notification at the bottom of the screen. Used for
/// feedback that outlives the page it came from (sign-out, guard redirects).
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    toast.set_class_name("toast");
    let toast: HtmlElement = toast.unchecked_into();

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = toast.parent_node() {
                parent.remove_child(&toast).ok();
            }
        });
    }
}
