//! Organization lookup.

use async_trait::async_trait;
use halcyon_client::models::Organization;
use halcyon_client::ApiClient;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ProviderError, Result};
use crate::lifecycle::DataSource;

/// Selector for an organization: exactly one of `id` or `domain`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationQuery {
    pub id: Option<String>,
    /// A verified domain; the first matching organization wins.
    pub domain: Option<String>,
}

/// Lookup handler for organizations.
#[derive(Debug, Default)]
pub struct OrganizationDataSource;

#[async_trait]
impl DataSource for OrganizationDataSource {
    type Query = OrganizationQuery;
    type Output = Organization;

    fn type_name(&self) -> &'static str {
        "halcyon_organization"
    }

    async fn read(&self, client: &ApiClient, query: &Self::Query) -> Result<Self::Output> {
        match (&query.id, &query.domain) {
            (Some(id), None) => {
                debug!(id = %id, "looking up organization by id");
                Ok(client.get_organization(id).await?)
            }
            (None, Some(domain)) => {
                debug!(domain = %domain, "looking up organization by domain");
                Ok(client.find_organization_by_domain(domain).await?)
            }
            _ => Err(ProviderError::Validation {
                attribute: "id",
                message: "exactly one of id or domain must be set".into(),
            }),
        }
    }
}
