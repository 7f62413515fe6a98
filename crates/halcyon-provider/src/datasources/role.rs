//! Organization-role lookup.

use async_trait::async_trait;
use halcyon_client::models::OrganizationRole;
use halcyon_client::ApiClient;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ProviderError, Result};
use crate::lifecycle::DataSource;

/// Selector for an organization role: the parent organization plus exactly
/// one of `slug` or `id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleQuery {
    pub organization_id: String,
    pub slug: Option<String>,
    pub id: Option<String>,
}

/// Lookup handler for organization roles.
#[derive(Debug, Default)]
pub struct RoleDataSource;

#[async_trait]
impl DataSource for RoleDataSource {
    type Query = RoleQuery;
    type Output = OrganizationRole;

    fn type_name(&self) -> &'static str {
        "halcyon_organization_role"
    }

    async fn read(&self, client: &ApiClient, query: &Self::Query) -> Result<Self::Output> {
        match (&query.slug, &query.id) {
            (Some(slug), None) => {
                debug!(
                    organization_id = %query.organization_id,
                    slug = %slug,
                    "looking up organization role by slug"
                );
                Ok(client
                    .get_organization_role(&query.organization_id, slug)
                    .await?)
            }
            (None, Some(id)) => {
                debug!(
                    organization_id = %query.organization_id,
                    id = %id,
                    "looking up organization role by id"
                );
                Ok(client
                    .find_organization_role_by_id(&query.organization_id, id)
                    .await?)
            }
            _ => Err(ProviderError::Validation {
                attribute: "slug",
                message: "exactly one of slug or id must be set".into(),
            }),
        }
    }
}
