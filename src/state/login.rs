//! Login form state machine.
//!
//! DESIGN
//! ======
//! The form and mutation lifecycles are modeled as one plain struct with an
//! explicit [`SubmitPhase`], driven by the page through signal updates. A
//! rejected login sets a single `credential_error` flag; the display helpers
//! derive both field messages from it, and it never blocks resubmission —
//! only schema validation errors on touched fields do.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use serde::Serialize;

/// Lifecycle of the login mutation as seen by the form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

/// Variables for the login mutation, normalized for transmission.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Lower-case and trim the email; the password goes through untouched.
    #[must_use]
    pub fn normalized(email: &str, password: &str) -> Self {
        Self {
            email: email.trim().to_lowercase(),
            password: password.to_owned(),
        }
    }
}

/// Controlled state for the credential form.
#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub email_touched: bool,
    pub password_touched: bool,
    pub email_error: Option<String>,
    pub password_error: Option<String>,
    pub credential_error: bool,
    pub phase: SubmitPhase,
}

impl LoginForm {
    /// Update the email field, revalidating and clearing any prior
    /// credential rejection.
    pub fn set_email(&mut self, value: String) {
        self.email = value;
        self.email_error = validate_email(&self.email);
        self.credential_error = false;
        if self.phase == SubmitPhase::Error {
            self.phase = SubmitPhase::Idle;
        }
    }

    /// Update the password field, revalidating and clearing any prior
    /// credential rejection.
    pub fn set_password(&mut self, value: String) {
        self.password = value;
        self.password_error = validate_password(&self.password);
        self.credential_error = false;
        if self.phase == SubmitPhase::Error {
            self.phase = SubmitPhase::Idle;
        }
    }

    /// Blur handler: mark the email touched so its error becomes visible.
    pub fn touch_email(&mut self) {
        self.email_touched = true;
        self.email_error = validate_email(&self.email);
    }

    /// Blur handler: mark the password touched so its error becomes visible.
    pub fn touch_password(&mut self) {
        self.password_touched = true;
        self.password_error = validate_password(&self.password);
    }

    /// Whether the submit control is disabled.
    ///
    /// Empty fields, an in-flight submission, or a touched validation error
    /// disable it; a credential rejection does not.
    #[must_use]
    pub fn submit_disabled(&self) -> bool {
        self.email.is_empty()
            || self.password.is_empty()
            || self.phase == SubmitPhase::Pending
            || (self.email_touched && self.email_error.is_some())
            || (self.password_touched && self.password_error.is_some())
    }

    /// Start a submission: validate everything, and if the form is clean,
    /// enter `Pending` and hand back the normalized credentials.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.submit_disabled() {
            return None;
        }
        self.touch_email();
        self.touch_password();
        if self.email_error.is_some() || self.password_error.is_some() {
            return None;
        }
        self.credential_error = false;
        self.phase = SubmitPhase::Pending;
        Some(Credentials::normalized(&self.email, &self.password))
    }

    /// The mutation succeeded; the page tears the form down right after.
    pub fn succeed(&mut self) {
        self.phase = SubmitPhase::Success;
    }

    /// The mutation failed: back to editing with the generic rejection set.
    pub fn fail_submission(&mut self) {
        self.phase = SubmitPhase::Error;
        self.credential_error = true;
    }

    /// Message shown under the email field, if any.
    #[must_use]
    pub fn email_message(&self) -> Option<&str> {
        if self.email_touched {
            if let Some(err) = self.email_error.as_deref() {
                return Some(err);
            }
        }
        self.credential_error.then_some("Wrong Credentials.")
    }

    /// Message shown under the password field, if any.
    ///
    /// A credential rejection marks the field invalid with an empty message;
    /// only the email field carries the text.
    #[must_use]
    pub fn password_message(&self) -> Option<&str> {
        if self.password_touched {
            if let Some(err) = self.password_error.as_deref() {
                return Some(err);
            }
        }
        self.credential_error.then_some("")
    }
}

fn validate_email(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some("Email is required.".to_owned());
    }
    let well_formed = value.split_once('@').is_some_and(|(local, domain)| {
        !local.is_empty()
            && domain
                .rsplit_once('.')
                .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
    });
    if well_formed {
        None
    } else {
        Some("Invalid email address.".to_owned())
    }
}

fn validate_password(value: &str) -> Option<String> {
    if value.is_empty() {
        Some("Password is required.".to_owned())
    } else {
        None
    }
}
