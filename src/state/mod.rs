//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth` for the session, `login` for the form
//! machine) so components depend on small focused models that test without a
//! browser.

pub mod auth;
pub mod login;
