//! SSO connection operations.
//!
//! Connections are read-only in the current Halcyon API generation:
//! provisioning and protocol configuration (SAML certificates, OIDC client
//! credentials) happen in the management console. That is a property of the
//! remote system, so no mutating method exists here — see
//! [`crate::capability::Connections`].

use crate::error::{ApiError, Result};
use crate::http::{encode_query, ApiClient};
use crate::models::{Connection, ConnectionType, Page};

impl ApiClient {
    /// Retrieve a connection by id.
    pub async fn get_connection(&self, id: &str) -> Result<Connection> {
        self.get(&format!("/connections/{id}")).await
    }

    /// List connections, optionally scoped to an organization.
    pub async fn list_connections(
        &self,
        organization_id: Option<&str>,
    ) -> Result<Page<Connection>> {
        let mut path = "/connections".to_string();
        if let Some(org) = organization_id {
            path = format!("{path}?{}", encode_query(&[("organization_id", org)]));
        }
        self.get(&path).await
    }

    /// Find a connection by organization and protocol type. Zero matches
    /// surfaces as a not-found error.
    pub async fn find_connection(
        &self,
        organization_id: &str,
        connection_type: ConnectionType,
    ) -> Result<Connection> {
        let query = encode_query(&[
            ("organization_id", organization_id),
            ("connection_type", connection_type.as_str()),
        ]);
        let page: Page<Connection> = self.get(&format!("/connections?{query}")).await?;

        page.data.into_iter().next().ok_or_else(|| {
            ApiError::not_found(format!(
                "no connection found for organization {organization_id} with type {connection_type}"
            ))
            .into()
        })
    }
}
