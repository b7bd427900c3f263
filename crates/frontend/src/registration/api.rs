use contracts::registration::{invite_from_query, invite_wire_value, INVITE_FIELD, REGISTER_PATH};
use gloo_net::http::Request;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlFormElement};

/// Query string of the current page, leading `?` included.
fn current_search() -> Result<String, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    window.location().search().map_err(|e| format!("{e:?}"))
}

/// Snapshot the form's fields and put the URL invite code under `invite`.
///
/// `FormData::set` replaces whatever `invite` entries the form already had.
pub fn build_form_data(form: &HtmlFormElement) -> Result<FormData, String> {
    let form_data = FormData::new_with_form(form).map_err(|e| format!("{e:?}"))?;

    let invite = invite_from_query(&current_search()?);
    form_data
        .set_with_str(INVITE_FIELD, invite_wire_value(invite.as_deref()))
        .map_err(|e| format!("{e:?}"))?;

    Ok(form_data)
}

/// Post the form to the registration endpoint without waiting for the answer.
///
/// Every call starts its own request; the outcome only reaches the console.
pub fn submit_registration(form: &HtmlFormElement) -> Result<(), String> {
    let form_data = build_form_data(form)?;

    spawn_local(async move {
        match post_registration(form_data).await {
            Ok(status) => log::debug!("POST {} -> {}", REGISTER_PATH, status),
            Err(e) => log::debug!("POST {} failed: {}", REGISTER_PATH, e),
        }
    });

    Ok(())
}

async fn post_registration(form_data: FormData) -> Result<u16, String> {
    // No Content-Type header: the browser sets the multipart boundary itself.
    let response = Request::post(REGISTER_PATH)
        .body(form_data)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    Ok(response.status())
}
