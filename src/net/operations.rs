//! GraphQL documents and typed responses for the launcher backend.
//!
//! The seam traits let the session probe and the login flow run against stub
//! clients in tests, with [`GraphqlClient`] as the one real implementor.

#[cfg(test)]
#[path = "operations_test.rs"]
mod operations_test;

use serde::Deserialize;

use crate::net::graphql::{GraphqlClient, GraphqlError};
use crate::state::login::Credentials;

/// Operation name the `Me` query result is cached under.
pub const ME_OPERATION: &str = "Me";

/// The "who am I" query; `me` is null for anonymous sessions.
pub const ME_QUERY: &str = "\
query Me {
  me {
    id
    email
    username
  }
}";

/// Credential exchange; returns a session token plus the user it belongs to.
pub const LOGIN_MUTATION: &str = "\
mutation Login($email: String!, $password: String!) {
  login(email: $email, password: $password) {
    token
    user {
      id
      email
      username
    }
  }
}";

/// An authenticated launcher account.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub username: String,
}

/// `data` payload of [`ME_QUERY`].
#[derive(Clone, Debug, Deserialize)]
pub struct MeData {
    #[serde(default)]
    pub me: Option<User>,
}

/// `data` payload of [`LOGIN_MUTATION`].
#[derive(Clone, Debug, Deserialize)]
pub struct LoginData {
    pub login: LoginPayload,
}

/// Successful login response: the opaque session token and the user.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginPayload {
    pub token: String,
    pub user: User,
}

/// Anything that can answer the "current user" query.
#[allow(async_fn_in_trait)]
pub trait CurrentUserQuery {
    /// # Errors
    ///
    /// Returns a [`GraphqlError`] when the query cannot be completed.
    async fn current_user(&self) -> Result<MeData, GraphqlError>;
}

/// Anything that can run the login mutation.
#[allow(async_fn_in_trait)]
pub trait LoginMutation {
    /// # Errors
    ///
    /// Returns a [`GraphqlError`] when the mutation fails, including the
    /// wrong-credentials rejection.
    async fn login(&self, credentials: &Credentials) -> Result<LoginPayload, GraphqlError>;
}

impl CurrentUserQuery for GraphqlClient {
    async fn current_user(&self) -> Result<MeData, GraphqlError> {
        self.query(ME_OPERATION, ME_QUERY, serde_json::Value::Null)
            .await
    }
}

impl LoginMutation for GraphqlClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginPayload, GraphqlError> {
        let variables = serde_json::to_value(credentials)
            .map_err(|e| GraphqlError::Decode(e.to_string()))?;
        let data: LoginData = self.mutate(LOGIN_MUTATION, variables).await?;
        Ok(data.login)
    }
}
