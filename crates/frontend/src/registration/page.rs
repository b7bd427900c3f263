use contracts::registration::FORM_ID;
use leptos::html;
use leptos::prelude::*;

use super::api::submit_registration;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form_ref: NodeRef<html::Form> = NodeRef::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(form) = form_ref.get() else {
            log::warn!("Registration form is not mounted");
            return;
        };
        if let Err(e) = submit_registration(&form) {
            log::warn!("Registration not sent: {}", e);
        }
    };

    view! {
        <div class="register-container">
            <div class="register-box">
                <h1>"Registration"</h1>

                <form id=FORM_ID node_ref=form_ref on:submit=on_submit>
                    <div class="form-group">
                        <label for="userName">"User name"</label>
                        <input type="text" id="userName" name="userName" required />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input type="password" id="password" name="password" required />
                    </div>

                    <div class="form-group">
                        <label for="userData">"About you"</label>
                        <textarea id="userData" name="userData" rows="4"></textarea>
                    </div>

                    <button type="submit" class="btn-primary">"Register"</button>
                </form>
            </div>
        </div>
    }
}
