use super::*;

fn user() -> User {
    User {
        id: "u-1".to_owned(),
        email: "steve@example.com".to_owned(),
        username: "steve".to_owned(),
    }
}

// =============================================================
// AuthState
// =============================================================

#[test]
fn auth_state_default_is_anonymous() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
    assert!(!state.is_auth());
}

#[test]
fn auth_state_is_not_auth_while_loading() {
    let state = AuthState {
        user: Some(user()),
        loading: true,
    };
    assert!(!state.is_auth());
}

#[test]
fn authenticated_state_passes_the_home_guard() {
    let state = AuthState::authenticated(user());
    assert!(state.is_auth());
    // The inverse guard predicate must not fire either.
    assert!(!(!state.loading && state.user.is_none()));
}

#[test]
fn auth_state_is_auth_with_user_after_probe() {
    let state = AuthState {
        user: Some(user()),
        loading: false,
    };
    assert!(state.is_auth());
}

// =============================================================
// Session
// =============================================================

#[test]
fn session_into_user_keeps_authenticated_user() {
    assert_eq!(Session::Authenticated(user()).into_user(), Some(user()));
}

#[test]
fn session_into_user_is_none_when_unauthenticated() {
    assert_eq!(Session::Unauthenticated.into_user(), None);
}
