//! Organization-role reconciliation tests — slug validation, the no-op
//! update shortcut, and server-computed field handling.

mod common;

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{client, T1, T2};
use halcyon_provider::lifecycle::ManagedResource;
use halcyon_provider::resources::{RoleConfig, RoleResource, RoleState};

fn config() -> RoleConfig {
    RoleConfig {
        organization_id: "org_1".into(),
        slug: "org-billing-admin".into(),
        name: "Billing Admin".into(),
        description: Some("Can manage billing and invoices".into()),
    }
}

fn role_json(name: &str, permissions: &[&str], updated_at: &str) -> serde_json::Value {
    json!({
        "id": "role_1",
        "organization_id": "org_1",
        "slug": "org-billing-admin",
        "name": name,
        "description": "Can manage billing and invoices",
        "type": "custom",
        "permissions": permissions,
        "created_at": T1,
        "updated_at": updated_at
    })
}

fn prior_state() -> RoleState {
    RoleState {
        id: "role_1".into(),
        organization_id: "org_1".into(),
        slug: "org-billing-admin".into(),
        name: "Billing Admin".into(),
        description: Some("Can manage billing and invoices".into()),
        role_type: Some("custom".into()),
        permissions: vec!["billing:manage".into()],
        created_at: None,
        updated_at: None,
    }
}

#[tokio::test]
async fn create_rejects_unprefixed_slug_before_any_network_call() {
    // Nothing is mounted: a request would fail differently than validation.
    let server = MockServer::start().await;

    let bad = RoleConfig {
        slug: "billing-admin".into(),
        ..config()
    };
    let err = RoleResource
        .create(&client(&server), &bad)
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert!(err.to_string().contains("org-"));
}

#[tokio::test]
async fn create_keeps_server_computed_fields_out_of_the_payload() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/authorization/organizations/org_1/roles"))
        .and(body_json(json!({
            "slug": "org-billing-admin",
            "name": "Billing Admin",
            "description": "Can manage billing and invoices"
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(role_json("Billing Admin", &["billing:manage"], T1)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let state = RoleResource
        .create(&client(&server), &config())
        .await
        .unwrap();

    assert_eq!(state.id, "role_1");
    assert_eq!(state.role_type.as_deref(), Some("custom"));
    assert_eq!(state.permissions, vec!["billing:manage".to_string()]);
}

#[tokio::test]
async fn empty_permission_list_stays_an_explicit_empty_sequence() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/authorization/organizations/org_1/roles/org-billing-admin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "role_1",
            "organization_id": "org_1",
            "slug": "org-billing-admin",
            "name": "Billing Admin",
            "type": "custom",
            "created_at": T1,
            "updated_at": T1
        })))
        .mount(&server)
        .await;

    let state = RoleResource
        .read(&client(&server), &prior_state())
        .await
        .unwrap()
        .unwrap();

    assert_eq!(state.permissions, Vec::<String>::new());
}

#[tokio::test]
async fn unchanged_update_skips_the_network_entirely() {
    let server = MockServer::start().await;

    let state = RoleResource
        .update(&client(&server), &prior_state(), &config())
        .await
        .unwrap();

    // No mocks were mounted; reaching the server would have failed.
    assert_eq!(state, prior_state());
}

#[tokio::test]
async fn changed_name_patches_by_organization_and_slug() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/authorization/organizations/org_1/roles/org-billing-admin"))
        .and(body_json(json!({
            "name": "Billing Administrator",
            "description": "Can manage billing and invoices"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(role_json("Billing Administrator", &["billing:manage"], T2)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let renamed = RoleConfig {
        name: "Billing Administrator".into(),
        ..config()
    };
    let state = RoleResource
        .update(&client(&server), &prior_state(), &renamed)
        .await
        .unwrap();

    assert_eq!(state.name, "Billing Administrator");
    assert_eq!(state.id, "role_1");
    assert_eq!(state.updated_at.unwrap().to_rfc3339(), "2024-02-01T10:30:00+00:00");
}

#[tokio::test]
async fn delete_is_idempotent_after_remote_404() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/authorization/organizations/org_1/roles/org-billing-admin"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    RoleResource
        .delete(&client(&server), &prior_state())
        .await
        .unwrap();
}
