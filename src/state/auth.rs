#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::operations::User;

/// Authentication state provided via context and filled in by the
/// session probe on mount. Pages read `loading` to defer guard decisions
/// until the probe has answered.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State after a confirmed session, from the probe or a fresh login.
    #[must_use]
    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            loading: false,
        }
    }

    /// True once the probe has confirmed an authenticated session.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        !self.loading && self.user.is_some()
    }
}

/// Outcome of a session probe.
///
/// Explicit result instead of an "empty user object" so callers
/// pattern-match rather than sniffing fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Session {
    Authenticated(User),
    Unauthenticated,
}

impl Session {
    #[must_use]
    pub fn into_user(self) -> Option<User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Unauthenticated => None,
        }
    }
}
