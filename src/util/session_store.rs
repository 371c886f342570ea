//! Session token persistence.
//!
//! Reads and writes the session cookie on `document.cookie`, clearing every
//! cookie on logout or before a fresh login attempt. Requires a browser
//! environment; SSR builds see an empty store. The [`SessionStore`] trait
//! keeps the flow logic independent of the mechanism so tests run against
//! [`MemoryStore`].

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use std::cell::RefCell;

/// Cookie the session token is stored under.
pub const SESSION_COOKIE: &str = "voxelia_token";

/// Opaque persistence boundary for the session token.
pub trait SessionStore {
    /// The stored token, if any.
    fn token(&self) -> Option<String>;
    /// Persist a freshly issued token.
    fn set_token(&self, token: &str);
    /// Remove every session artifact.
    fn clear(&self);
}

/// `document.cookie`-backed store.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieStore;

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;
    web_sys::window()?.document()?.dyn_into().ok()
}

impl SessionStore for CookieStore {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let raw = html_document()?.cookie().ok()?;
            cookie_value(&raw, SESSION_COOKIE)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set_token(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(doc) = html_document() {
                let _ = doc.set_cookie(&format!(
                    "{SESSION_COOKIE}={token}; path=/; samesite=lax"
                ));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(doc) = html_document() {
                if let Ok(raw) = doc.cookie() {
                    for name in cookie_names(&raw) {
                        let _ = doc.set_cookie(&format!("{name}=; path=/; max-age=0"));
                    }
                }
            }
        }
    }
}

/// In-memory store for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    token: RefCell<Option<String>>,
}

impl SessionStore for MemoryStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set_token(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

/// Value of `name` in a raw `document.cookie` string.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn cookie_value(raw: &str, name: &str) -> Option<String> {
    raw.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.trim().to_owned())
    })
}

/// Names of every cookie in a raw `document.cookie` string.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn cookie_names(raw: &str) -> Vec<String> {
    raw.split(';')
        .filter_map(|pair| {
            let name = pair.split_once('=').map_or(pair, |(key, _)| key).trim();
            (!name.is_empty()).then(|| name.to_owned())
        })
        .collect()
}
