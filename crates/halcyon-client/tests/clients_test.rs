//! Integration tests for the entity clients — list filters and search
//! helpers over a mock Halcyon API.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use halcyon_client::models::ConnectionType;
use halcyon_client::ApiClient;

fn client(server: &MockServer) -> ApiClient {
    ApiClient::new("sk_test_key", None, Some(server.uri())).unwrap()
}

fn empty_page() -> serde_json::Value {
    json!({ "data": [], "list_metadata": {} })
}

#[tokio::test]
async fn find_organization_by_domain_takes_first_match() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizations"))
        .and(query_param("domains", "acme.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {
                    "id": "org_1",
                    "name": "Acme",
                    "created_at": "2024-01-15T09:00:00Z",
                    "updated_at": "2024-01-15T09:00:00Z"
                },
                {
                    "id": "org_2",
                    "name": "Acme Staging",
                    "created_at": "2024-01-15T09:00:00Z",
                    "updated_at": "2024-01-15T09:00:00Z"
                }
            ],
            "list_metadata": { "after": "org_2" }
        })))
        .mount(&server)
        .await;

    let org = client(&server)
        .find_organization_by_domain("acme.com")
        .await
        .unwrap();
    assert_eq!(org.id, "org_1");
}

#[tokio::test]
async fn find_organization_by_domain_zero_matches_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizations"))
        .and(query_param("domains", "nobody.example"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .mount(&server)
        .await;

    let err = client(&server)
        .find_organization_by_domain("nobody.example")
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(err.to_string().contains("nobody.example"));
}

#[tokio::test]
async fn list_users_applies_both_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user_management/users"))
        .and(query_param("email", "jane@acme.com"))
        .and(query_param("organization_id", "org_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": "user_1",
                "email": "jane@acme.com",
                "email_verified": true,
                "created_at": "2024-01-15T09:00:00Z",
                "updated_at": "2024-01-15T09:00:00Z"
            }],
            "list_metadata": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server)
        .list_users(Some("jane@acme.com"), Some("org_1"))
        .await
        .unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.data[0].id, "user_1");
}

#[tokio::test]
async fn find_connection_queries_organization_and_type() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/connections"))
        .and(query_param("organization_id", "org_1"))
        .and(query_param("connection_type", "OktaSAML"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": "conn_1",
                "organization_id": "org_1",
                "connection_type": "OktaSAML",
                "name": "Okta SSO",
                "state": "active",
                "status": "linked",
                "created_at": "2024-01-15T09:00:00Z",
                "updated_at": "2024-01-15T09:00:00Z"
            }],
            "list_metadata": {}
        })))
        .mount(&server)
        .await;

    let conn = client(&server)
        .find_connection("org_1", ConnectionType::OktaSaml)
        .await
        .unwrap();
    assert_eq!(conn.id, "conn_1");
    assert_eq!(conn.connection_type, ConnectionType::OktaSaml);
}

#[tokio::test]
async fn find_directory_group_by_name_scans_client_side() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/directory_groups"))
        .and(query_param("directory", "dir_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {
                    "id": "grp_1",
                    "directory_id": "dir_1",
                    "name": "Engineering",
                    "created_at": "2024-01-15T09:00:00Z",
                    "updated_at": "2024-01-15T09:00:00Z"
                },
                {
                    "id": "grp_2",
                    "directory_id": "dir_1",
                    "name": "Sales",
                    "created_at": "2024-01-15T09:00:00Z",
                    "updated_at": "2024-01-15T09:00:00Z"
                }
            ],
            "list_metadata": {}
        })))
        .mount(&server)
        .await;

    let group = client(&server)
        .find_directory_group_by_name("dir_1", "Sales")
        .await
        .unwrap();
    assert_eq!(group.id, "grp_2");

    let err = client(&server)
        .find_directory_group_by_name("dir_1", "Marketing")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn find_organization_role_by_id_scans_the_role_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/authorization/organizations/org_1/roles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {
                    "id": "role_1",
                    "organization_id": "org_1",
                    "slug": "org-admin",
                    "name": "Admin",
                    "type": "custom",
                    "permissions": ["members:manage"],
                    "created_at": "2024-01-15T09:00:00Z",
                    "updated_at": "2024-01-15T09:00:00Z"
                }
            ],
            "list_metadata": {}
        })))
        .mount(&server)
        .await;

    let role = client(&server)
        .find_organization_role_by_id("org_1", "role_1")
        .await
        .unwrap();
    assert_eq!(role.slug, "org-admin");

    let err = client(&server)
        .find_organization_role_by_id("org_1", "role_missing")
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}
