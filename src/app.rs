//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::graphql::GraphqlClient;
use crate::pages::{home::HomePage, login::LoginPage, register::RegisterPage};
use crate::state::auth::AuthState;

/// GraphQL endpoint served by the launcher backend.
const GRAPHQL_ENDPOINT: &str = "/graphql";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth state and GraphQL client contexts, runs the
/// one-shot session probe that feeds the authentication guard, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let client = GraphqlClient::new(GRAPHQL_ENDPOINT);
    let auth = RwSignal::new(AuthState {
        user: None,
        loading: true,
    });

    provide_context(auth);
    provide_context(client.clone());

    // Session probe: a single best-effort "who am I" on mount. Pages only
    // ever see the resulting { user, loading } pair.
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let session = crate::net::session::check_logged_in(&client).await;
            auth.set(AuthState {
                user: session.into_user(),
                loading: false,
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = client;
        auth.update(|state| state.loading = false);
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/voxelia-ui.css"/>
        <Title text="Voxelia"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("home") view=HomePage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
