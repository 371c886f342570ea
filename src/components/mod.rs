//! Small reusable view components.

pub mod hint;
