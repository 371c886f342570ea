//! Registration page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

/// Registration page — account creation lives here; the login page links
/// over via its "Need account?" action.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let on_back = move |_| navigate("/login", NavigateOptions::default());

    view! {
        <Title text="Voxelia - Register"/>

        <div class="register-page">
            <h1>"Create an account"</h1>
            <p>"Registration is not open yet."</p>
            <button class="btn" on:click=on_back>
                "Back to login"
            </button>
        </div>
    }
}
