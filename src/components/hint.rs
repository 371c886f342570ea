//! Loading placeholder shown while the auth check or a mutation is in flight.

use leptos::prelude::*;

/// Spinner placeholder rendered instead of an interactive form.
#[component]
pub fn Hint() -> impl IntoView {
    view! {
        <div class="hint" role="status">
            <div class="hint__spinner"></div>
            <p>"Loading..."</p>
        </div>
    }
}
