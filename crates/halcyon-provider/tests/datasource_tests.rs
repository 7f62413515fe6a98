//! Data-source tests — selector validation and lookup-by-key behavior.

mod common;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client, T1};
use halcyon_client::models::ConnectionType;
use halcyon_provider::datasources::{
    ConnectionDataSource, ConnectionQuery, OrganizationDataSource, OrganizationQuery,
    RoleDataSource, RoleQuery, UserDataSource, UserQuery,
};
use halcyon_provider::lifecycle::DataSource;

#[tokio::test]
async fn organization_lookup_requires_exactly_one_selector() {
    let server = MockServer::start().await;
    let source = OrganizationDataSource;

    let neither = OrganizationQuery::default();
    let err = source.read(&client(&server), &neither).await.unwrap_err();
    assert!(err.is_validation());

    let both = OrganizationQuery {
        id: Some("org_1".into()),
        domain: Some("acme.com".into()),
    };
    let err = source.read(&client(&server), &both).await.unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn organization_lookup_by_domain_surfaces_zero_matches_as_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/organizations"))
        .and(query_param("domains", "ghost.example"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "list_metadata": {}
        })))
        .mount(&server)
        .await;

    let query = OrganizationQuery {
        id: None,
        domain: Some("ghost.example".into()),
    };
    let err = OrganizationDataSource
        .read(&client(&server), &query)
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(err.to_string().contains("ghost.example"));
}

#[tokio::test]
async fn connection_lookup_by_organization_and_type() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/connections"))
        .and(query_param("organization_id", "org_1"))
        .and(query_param("connection_type", "GenericOIDC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": "conn_9",
                "organization_id": "org_1",
                "connection_type": "GenericOIDC",
                "name": "Corp OIDC",
                "state": "active",
                "status": "linked",
                "created_at": T1,
                "updated_at": T1
            }],
            "list_metadata": {}
        })))
        .mount(&server)
        .await;

    let query = ConnectionQuery {
        id: None,
        organization_id: Some("org_1".into()),
        connection_type: Some(ConnectionType::GenericOidc),
    };
    let conn = ConnectionDataSource
        .read(&client(&server), &query)
        .await
        .unwrap();

    assert_eq!(conn.id, "conn_9");
    assert_eq!(conn.connection_type, ConnectionType::GenericOidc);
}

#[tokio::test]
async fn connection_lookup_rejects_a_partial_selector() {
    let server = MockServer::start().await;

    // organization_id without connection_type is not a usable selector.
    let query = ConnectionQuery {
        id: None,
        organization_id: Some("org_1".into()),
        connection_type: None,
    };
    let err = ConnectionDataSource
        .read(&client(&server), &query)
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn user_lookup_by_email() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user_management/users"))
        .and(query_param("email", "jane@acme.com"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": "user_1",
                "email": "jane@acme.com",
                "email_verified": true,
                "created_at": T1,
                "updated_at": T1
            }],
            "list_metadata": {}
        })))
        .mount(&server)
        .await;

    let query = UserQuery {
        id: None,
        email: Some("jane@acme.com".into()),
    };
    let user = UserDataSource.read(&client(&server), &query).await.unwrap();
    assert_eq!(user.id, "user_1");
}

#[tokio::test]
async fn role_lookup_by_slug_hits_the_slug_addressed_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/authorization/organizations/org_1/roles/org-auditor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "role_7",
            "organization_id": "org_1",
            "slug": "org-auditor",
            "name": "Auditor",
            "type": "custom",
            "permissions": [],
            "created_at": T1,
            "updated_at": T1
        })))
        .mount(&server)
        .await;

    let query = RoleQuery {
        organization_id: "org_1".into(),
        slug: Some("org-auditor".into()),
        id: None,
    };
    let role = RoleDataSource.read(&client(&server), &query).await.unwrap();
    assert_eq!(role.id, "role_7");
    assert!(role.permissions.is_empty());
}
