//! Authenticated landing page.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::session_store::{CookieStore, SessionStore};

/// Home page — the launcher's authenticated area.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    let nav_guard = navigate.clone();
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            nav_guard("/login", NavigateOptions::default());
        }
    });

    let nav_logout = navigate.clone();
    let on_logout = move |_| {
        CookieStore.clear();
        auth.set(AuthState::default());
        nav_logout("/login", NavigateOptions::default());
    };

    view! {
        <Title text="Voxelia - Home"/>

        <div class="home-page">
            <header class="home-page__header">
                <h1>"Voxelia"</h1>
                <button class="btn" on:click=on_logout>
                    "Sign out"
                </button>
            </header>
            <p>
                {move || {
                    auth.get()
                        .user
                        .map(|u| format!("Signed in as {}", u.username))
                }}
            </p>
        </div>
    }
}
