//! Session probe and login completion.
//!
//! ERROR HANDLING
//! ==============
//! The probe fails open: any transport, server, or decode error is logged
//! and reported as [`Session::Unauthenticated`], so callers never branch on
//! an error path to decide "not logged in".

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::graphql::QueryCache;
use crate::net::operations::CurrentUserQuery;
use crate::state::auth::Session;
use crate::util::session_store::SessionStore;

/// Ask the backend who the current session belongs to.
///
/// A single best-effort attempt: no retries, no timeout. Never returns an
/// error.
pub async fn check_logged_in<C: CurrentUserQuery>(client: &C) -> Session {
    match client.current_user().await {
        Ok(data) => match data.me {
            Some(user) => Session::Authenticated(user),
            None => Session::Unauthenticated,
        },
        Err(err) => {
            leptos::logging::warn!("session probe failed: {err}");
            Session::Unauthenticated
        }
    }
}

/// Commit a successful login: persist the token, invalidate every cached
/// query result, then navigate into the authenticated area.
///
/// The order is load-bearing: nothing observable changes until the token is
/// stored, and navigation only happens once the cache holds no stale reads.
pub fn complete_login<S: SessionStore + ?Sized>(
    store: &S,
    cache: &QueryCache,
    token: &str,
    navigate: impl FnOnce(),
) {
    store.set_token(token);
    cache.reset();
    navigate();
}
