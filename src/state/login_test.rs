use super::*;

fn filled_form() -> LoginForm {
    let mut form = LoginForm::default();
    form.set_email("steve@example.com".to_owned());
    form.set_password("secret".to_owned());
    form
}

// =============================================================
// Normalization
// =============================================================

#[test]
fn credentials_lowercase_and_trim_email() {
    let creds = Credentials::normalized("  USER@Example.com ", "secret");
    assert_eq!(creds.email, "user@example.com");
    assert_eq!(creds.password, "secret");
}

#[test]
fn credentials_pass_password_through_untouched() {
    let creds = Credentials::normalized("a@b.co", "  P4ss word  ");
    assert_eq!(creds.password, "  P4ss word  ");
}

#[test]
fn begin_submit_hands_back_normalized_credentials() {
    let mut form = LoginForm::default();
    form.set_email("  USER@Example.com ".to_owned());
    form.set_password("secret".to_owned());
    let creds = form.begin_submit().expect("submittable");
    assert_eq!(creds.email, "user@example.com");
    assert_eq!(creds.password, "secret");
    assert_eq!(form.phase, SubmitPhase::Pending);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn email_error_hidden_until_touched() {
    let mut form = LoginForm::default();
    form.set_email("not-an-email".to_owned());
    assert!(form.email_error.is_some());
    assert_eq!(form.email_message(), None);
    form.touch_email();
    assert_eq!(form.email_message(), Some("Invalid email address."));
}

#[test]
fn blur_on_empty_fields_sets_required_errors() {
    let mut form = LoginForm::default();
    form.touch_email();
    form.touch_password();
    assert_eq!(form.email_message(), Some("Email is required."));
    assert_eq!(form.password_message(), Some("Password is required."));
}

#[test]
fn email_validation_accepts_plain_addresses() {
    let mut form = LoginForm::default();
    for ok in ["a@b.co", "first.last@sub.example.org", " padded@example.com "] {
        form.set_email(ok.to_owned());
        assert!(form.email_error.is_none(), "rejected {ok:?}");
    }
    for bad in ["@example.com", "user@", "user@nodot", "user@domain."] {
        form.set_email(bad.to_owned());
        assert!(form.email_error.is_some(), "accepted {bad:?}");
    }
}

// =============================================================
// Submit control
// =============================================================

#[test]
fn submit_disabled_matrix_over_empty_fields_and_pending() {
    for (email, password, pending, expected) in [
        ("", "", false, true),
        ("steve@example.com", "", false, true),
        ("", "secret", false, true),
        ("steve@example.com", "secret", false, false),
        ("steve@example.com", "secret", true, true),
    ] {
        let mut form = LoginForm::default();
        if !email.is_empty() {
            form.set_email(email.to_owned());
        }
        if !password.is_empty() {
            form.set_password(password.to_owned());
        }
        if pending {
            form.phase = SubmitPhase::Pending;
        }
        assert_eq!(
            form.submit_disabled(),
            expected,
            "email={email:?} password={password:?} pending={pending}"
        );
    }
}

#[test]
fn touched_validation_error_disables_submit() {
    let mut form = filled_form();
    form.set_email("broken".to_owned());
    assert!(!form.submit_disabled(), "untouched error must not disable");
    form.touch_email();
    assert!(form.submit_disabled());
}

#[test]
fn begin_submit_refuses_invalid_untouched_email() {
    let mut form = LoginForm::default();
    form.set_email("broken".to_owned());
    form.set_password("secret".to_owned());
    assert!(form.begin_submit().is_none());
    assert_eq!(form.phase, SubmitPhase::Idle);
    assert!(form.email_touched, "submit must surface the error");
}

#[test]
fn begin_submit_refuses_while_pending() {
    let mut form = filled_form();
    assert!(form.begin_submit().is_some());
    assert!(form.begin_submit().is_none(), "one submission at a time");
}

// =============================================================
// Mutation failure
// =============================================================

#[test]
fn failure_shows_generic_rejection_on_email_only() {
    let mut form = filled_form();
    form.begin_submit().expect("submittable");
    form.fail_submission();
    assert_eq!(form.phase, SubmitPhase::Error);
    assert_eq!(form.email_message(), Some("Wrong Credentials."));
    // Password is marked invalid but carries no text.
    assert_eq!(form.password_message(), Some(""));
}

#[test]
fn failure_reenables_submit() {
    let mut form = filled_form();
    form.begin_submit().expect("submittable");
    form.fail_submission();
    assert!(!form.submit_disabled());
}

#[test]
fn editing_after_failure_clears_rejection() {
    let mut form = filled_form();
    form.begin_submit().expect("submittable");
    form.fail_submission();
    form.set_password("secret2".to_owned());
    assert!(!form.credential_error);
    assert_eq!(form.email_message(), None);
    assert_eq!(form.password_message(), None);
    assert_eq!(form.phase, SubmitPhase::Idle);
}

#[test]
fn success_marks_phase_success() {
    let mut form = filled_form();
    form.begin_submit().expect("submittable");
    form.succeed();
    assert_eq!(form.phase, SubmitPhase::Success);
}
