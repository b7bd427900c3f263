use contracts::registration::FORM_ID;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlFormElement};

use super::api::submit_registration;

/// Take over the form's submit: the page never navigates, the fields go to
/// the registration endpoint instead.
pub fn intercept_form(form: &HtmlFormElement) -> Result<(), String> {
    intercept_form_with(form, |form| {
        if let Err(e) = submit_registration(form) {
            log::warn!("Registration not sent: {}", e);
        }
    })
}

/// Cancel every submit of `form` and hand the form to `on_submit` instead.
///
/// The listener stays registered for the lifetime of the page.
pub fn intercept_form_with<F>(form: &HtmlFormElement, on_submit: F) -> Result<(), String>
where
    F: Fn(&HtmlFormElement) + 'static,
{
    let target = form.clone();
    let listener = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
        ev.prevent_default();
        on_submit(&target);
    });

    form.add_event_listener_with_callback("submit", listener.as_ref().unchecked_ref())
        .map_err(|e| format!("{e:?}"))?;
    listener.forget();

    Ok(())
}

/// Attach the interceptor to the page's `#userForm`.
///
/// Returns `false` when the document has no such form.
pub fn attach_to_document() -> bool {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(FORM_ID))
    else {
        return false;
    };

    let form = match element.dyn_into::<HtmlFormElement>() {
        Ok(form) => form,
        Err(_) => {
            log::warn!("#{} is not a <form>", FORM_ID);
            return false;
        }
    };

    match intercept_form(&form) {
        Ok(()) => {
            log::debug!("Intercepting submit of #{}", FORM_ID);
            true
        }
        Err(e) => {
            log::warn!("Cannot intercept #{}: {}", FORM_ID, e);
            false
        }
    }
}
