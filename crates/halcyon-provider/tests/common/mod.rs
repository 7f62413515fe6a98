//! Shared helpers for reconciliation tests against a mock Halcyon API.

#![allow(dead_code)]

use halcyon_client::ApiClient;
use wiremock::MockServer;

/// Builds an [`ApiClient`] pointed at the mock server.
pub fn client(server: &MockServer) -> ApiClient {
    ApiClient::new("sk_test_key", None, Some(server.uri())).unwrap()
}

pub const T1: &str = "2024-01-15T09:00:00Z";
pub const T2: &str = "2024-02-01T10:30:00Z";
