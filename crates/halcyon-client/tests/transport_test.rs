//! Integration tests for the transport layer — rate-limit retry, body
//! resend, and error normalization against a mock Halcyon API.

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use halcyon_client::models::{CreateOrganization, DomainUpsert, Organization};
use halcyon_client::{ApiClient, ErrorKind};

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new("sk_test_key", None, Some(server.uri())).unwrap()
}

fn organization_json() -> serde_json::Value {
    json!({
        "id": "org_1",
        "object": "organization",
        "name": "Acme",
        "domains": [{
            "id": "dom_1",
            "domain": "acme.com",
            "state": "verified",
            "organization_id": "org_1"
        }],
        "created_at": "2024-01-15T09:00:00Z",
        "updated_at": "2024-01-15T09:00:00Z"
    })
}

#[tokio::test]
async fn every_request_carries_bearer_auth_and_content_type() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizations/org_1"))
        .and(header("Authorization", "Bearer sk_test_key"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(organization_json()))
        .expect(1)
        .mount(&server)
        .await;

    let org = client(&server).get_organization("org_1").await.unwrap();
    assert_eq!(org.id, "org_1");
    assert_eq!(org.domains.len(), 1);
}

#[tokio::test]
async fn rate_limited_write_retries_with_identical_body() {
    let server = MockServer::start().await;

    let expected_body = json!({
        "name": "Acme",
        "domain_data": [{"domain": "acme.com", "state": "verified"}]
    });

    // First attempt is rate limited; the retry must carry the same bytes.
    Mock::given(method("POST"))
        .and(path("/organizations"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/organizations"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(201).set_body_json(organization_json()))
        .expect(1)
        .mount(&server)
        .await;

    let req = CreateOrganization {
        name: "Acme".into(),
        domain_data: vec![DomainUpsert::verified("acme.com")],
    };
    let org = client(&server).create_organization(&req).await.unwrap();
    assert_eq!(org.id, "org_1");
}

#[tokio::test]
async fn exhausted_retries_surface_the_final_rate_limit_response() {
    let server = MockServer::start().await;

    // Initial attempt plus three retries, all rate limited.
    Mock::given(method("GET"))
        .and(path("/organizations/org_1"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .expect(4)
        .mount(&server)
        .await;

    let err = client(&server)
        .get_organization("org_1")
        .await
        .unwrap_err();

    assert!(err.is_rate_limited());
    assert!(err.to_string().contains("Rate limit exceeded"));
}

#[tokio::test]
async fn validation_errors_preserve_field_detail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/organizations"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "Validation failed",
            "code": "invalid_request",
            "errors": [
                {"field": "name", "code": "required", "message": "Name is required"}
            ]
        })))
        .mount(&server)
        .await;

    let req = CreateOrganization {
        name: String::new(),
        domain_data: Vec::new(),
    };
    let err = client(&server).create_organization(&req).await.unwrap_err();

    assert!(err.is_bad_request());
    let rendered = err.to_string();
    assert!(rendered.contains("Validation failed"));
    assert!(rendered.contains("name"));
    assert!(rendered.contains("required"));
}

#[tokio::test]
async fn non_json_error_body_becomes_the_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizations/org_1"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&server)
        .await;

    let err = client(&server)
        .get_organization("org_1")
        .await
        .unwrap_err();

    assert!(err.is_internal_server());
    assert!(err.to_string().contains("upstream unavailable"));
}

#[tokio::test]
async fn missing_resource_classifies_as_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizations/org_gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Organization not found",
            "code": "entity_not_found"
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .get_organization("org_gone")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.kind(), Some(ErrorKind::NotFound));
}

#[tokio::test]
async fn delete_accepts_an_empty_response_body() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/organizations/org_1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client(&server).delete_organization("org_1").await.unwrap();
}

#[tokio::test]
async fn success_body_decode_failure_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizations/org_1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client(&server)
        .get_organization("org_1")
        .await
        .unwrap_err();

    assert!(matches!(err, halcyon_client::Error::Decode(_)));
    assert_eq!(err.kind(), None);
}

#[tokio::test]
async fn rate_limited_get_eventually_succeeds() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizations/org_1"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/organizations/org_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(organization_json()))
        .expect(1)
        .mount(&server)
        .await;

    let org: Organization = client(&server).get_organization("org_1").await.unwrap();
    assert_eq!(org.name, "Acme");
}
