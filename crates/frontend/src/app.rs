use crate::registration::RegisterPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <RegisterPage />
    }
}
