use super::*;

use std::cell::RefCell;

use futures::executor::block_on;

use crate::net::graphql::decode_data;

// =============================================================
// Response shapes
// =============================================================

#[test]
fn me_data_decodes_user() {
    let data: MeData = decode_data(serde_json::json!({
        "me": {"id": "u-1", "email": "steve@example.com", "username": "steve"}
    }))
    .expect("me payload");
    assert_eq!(data.me.expect("user").username, "steve");
}

#[test]
fn me_data_tolerates_null_and_missing_me() {
    let data: MeData = decode_data(serde_json::json!({"me": null})).expect("null me");
    assert!(data.me.is_none());
    let data: MeData = decode_data(serde_json::json!({})).expect("missing me");
    assert!(data.me.is_none());
}

#[test]
fn login_data_decodes_token_and_user() {
    let data: LoginData = decode_data(serde_json::json!({
        "login": {
            "token": "abc123",
            "user": {"id": "u-1", "email": "steve@example.com", "username": "steve"},
        }
    }))
    .expect("login payload");
    assert_eq!(data.login.token, "abc123");
    assert_eq!(data.login.user.id, "u-1");
}

// =============================================================
// Mutation variables
// =============================================================

/// Records the variables the mutation was invoked with.
#[derive(Default)]
struct RecordingClient {
    seen: RefCell<Vec<Credentials>>,
}

impl LoginMutation for RecordingClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginPayload, GraphqlError> {
        self.seen.borrow_mut().push(credentials.clone());
        Err(GraphqlError::Server("Wrong credentials".to_owned()))
    }
}

#[test]
fn login_receives_normalized_variables() {
    let client = RecordingClient::default();
    let creds = Credentials::normalized("  USER@Example.com ", "secret");
    let _ = block_on(client.login(&creds));
    assert_eq!(
        client.seen.borrow().as_slice(),
        &[Credentials {
            email: "user@example.com".to_owned(),
            password: "secret".to_owned(),
        }]
    );
}

#[test]
fn credentials_serialize_as_mutation_variables() {
    let creds = Credentials {
        email: "user@example.com".to_owned(),
        password: "secret".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&creds).expect("serialize"),
        serde_json::json!({"email": "user@example.com", "password": "secret"})
    );
}

#[test]
fn documents_name_their_operations() {
    assert!(ME_QUERY.starts_with("query Me"));
    assert!(LOGIN_MUTATION.starts_with("mutation Login"));
}
