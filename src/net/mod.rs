//! GraphQL transport and session networking.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning [`graphql::GraphqlError::Unavailable`] since the backend
//! is only reachable from the browser.

pub mod graphql;
pub mod operations;
pub mod session;
