use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Event, EventInit, HtmlFormElement};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

pub fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Replace the page query string without reloading.
pub fn set_search(search: &str) {
    let window = web_sys::window().unwrap();
    let url = format!("{}{}", window.location().pathname().unwrap(), search);
    window
        .history()
        .unwrap()
        .replace_state_with_url(&JsValue::NULL, "", Some(&url))
        .unwrap();
}

/// Mount a `<form>` with the given inner markup into the body.
pub fn mount_form(inner_html: &str) -> HtmlFormElement {
    let document = document();
    let form: HtmlFormElement = document.create_element("form").unwrap().dyn_into().unwrap();
    form.set_inner_html(inner_html);
    document.body().unwrap().append_child(&form).unwrap();
    form
}

pub fn submit_event() -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    Event::new_with_event_init_dict("submit", &init).unwrap()
}

/// Swap `window.fetch` for a stub that records each request and never settles.
pub fn record_fetches() -> js_sys::Array {
    let calls = js_sys::Array::new();
    let factory = js_sys::Function::new_with_args(
        "calls",
        "return function (request) { calls.push(request); return new Promise(function () {}); };",
    );
    let fetch = factory.call1(&JsValue::NULL, &calls).unwrap();
    js_sys::Reflect::set(&web_sys::window().unwrap(), &"fetch".into(), &fetch).unwrap();
    calls
}

/// Let queued `spawn_local` tasks run.
pub async fn settle() {
    for _ in 0..4 {
        JsFuture::from(js_sys::Promise::resolve(&JsValue::NULL))
            .await
            .unwrap();
    }
}
