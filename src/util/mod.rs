//! Browser-adjacent utilities.

pub mod session_store;
