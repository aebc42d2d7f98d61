//! Common test utilities for integration tests.
//!
//! Provides a client wired to a wiremock server and re-exports the types
//! every test file needs.

#[allow(unused_imports)]
pub use wiremock::matchers::{body_json, body_string_contains, method, path, query_param};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use vvp_client::VvpClient;

/// Build a client pointed at the mock server.
pub fn test_client(server: &MockServer) -> VvpClient {
    VvpClient::builder()
        .base_url(server.uri())
        .build()
        .expect("client should build against mock server")
}

/// Build a client with a bearer token configured.
#[allow(dead_code)]
pub fn test_client_with_token(server: &MockServer, token: &str) -> VvpClient {
    VvpClient::builder()
        .base_url(server.uri())
        .token(Some(secrecy::SecretString::from(token.to_string())))
        .build()
        .expect("client should build against mock server")
}
