//! Login page with email/password credential form.

use leptos::ev;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::hint::Hint;
use crate::net::graphql::GraphqlClient;
use crate::net::operations::LoginMutation;
use crate::net::session::complete_login;
use crate::state::auth::AuthState;
use crate::state::login::{LoginForm, SubmitPhase};
use crate::util::session_store::{CookieStore, SessionStore};

/// Login page — credential form submitting the login mutation.
///
/// Redirects to `/home` when the auth guard already reports a session; any
/// other mount clears stale session cookies before the form is interactive.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let client = expect_context::<GraphqlClient>();
    let navigate = use_navigate();
    let form = RwSignal::new(LoginForm::default());

    // Already signed in: leave without touching cookies or the mutation.
    let nav_redirect = navigate.clone();
    Effect::new(move || {
        if auth.get().is_auth() {
            nav_redirect("/home", NavigateOptions::default());
        }
    });

    // A stale token must never coexist with a fresh login attempt.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            CookieStore.clear();
        }
    });

    let submit_client = client.clone();
    let nav_submit = navigate.clone();
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(credentials) = form.try_update(LoginForm::begin_submit).flatten() else {
            return;
        };
        let client = submit_client.clone();
        let navigate = nav_submit.clone();
        leptos::task::spawn_local(async move {
            match client.login(&credentials).await {
                Ok(payload) => {
                    form.update(LoginForm::succeed);
                    // The guard must see the new session before /home
                    // mounts, or its redirect sends the user straight back.
                    auth.set(AuthState::authenticated(payload.user.clone()));
                    complete_login(&CookieStore, client.cache(), &payload.token, || {
                        navigate("/home", NavigateOptions::default());
                    });
                }
                Err(err) => {
                    // Full detail to the console; the user only ever sees
                    // the generic rejection.
                    leptos::logging::error!("login failed: {err}");
                    form.update(LoginForm::fail_submission);
                }
            }
        });
    };

    let nav_register = navigate.clone();
    let on_register = move |_| nav_register("/register", NavigateOptions::default());
    let busy = move || {
        auth.get().loading || form.with(|f| f.phase == SubmitPhase::Pending)
    };

    view! {
        <Title text="Voxelia - Login"/>

        <Show
            when=move || !busy()
            fallback=|| view! { <Hint/> }
        >
            <form class="login-page" on:submit=on_submit.clone()>
                <h1 class="login-page__logo">"Voxelia"</h1>

                <div class="login-page__field">
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        placeholder="Email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| {
                            form.update(|f| f.set_email(event_target_value(&ev)));
                        }
                        on:blur=move |_| form.update(LoginForm::touch_email)
                    />
                    <span class="login-page__error">
                        {move || form.with(|f| f.email_message().map(str::to_owned))}
                    </span>
                </div>

                <div class="login-page__field">
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        name="password"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| {
                            form.update(|f| f.set_password(event_target_value(&ev)));
                        }
                        on:blur=move |_| form.update(LoginForm::touch_password)
                    />
                    <span class="login-page__error">
                        {move || form.with(|f| f.password_message().map(str::to_owned))}
                    </span>
                </div>

                <div class="login-page__actions">
                    <button
                        type="button"
                        class="login-page__need-account"
                        on:click=on_register.clone()
                    >
                        "Need account?"
                    </button>
                    <button
                        type="submit"
                        class="btn btn--primary"
                        disabled=move || form.with(LoginForm::submit_disabled)
                    >
                        "Login"
                    </button>
                </div>
            </form>
        </Show>
    }
}
