//! Organization-role reconciliation.
//!
//! Roles are addressed by `(organization_id, slug)` — the remote endpoints
//! are slug-keyed, so the opaque id is carried in state but never used for
//! addressing. `type` and `permissions` are server-computed and never sent
//! on writes.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use halcyon_client::models::{CreateOrganizationRole, OrganizationRole, UpdateOrganizationRole};
use halcyon_client::ApiClient;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ProviderError, Result};
use crate::lifecycle::{Imported, ManagedResource};
use crate::merge::non_empty;

/// Required prefix for managed role slugs, applied before transmission.
pub const ROLE_SLUG_PREFIX: &str = "org-";

/// Desired configuration for an organization role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleConfig {
    pub organization_id: String,
    /// Unique within the organization; must start with
    /// [`ROLE_SLUG_PREFIX`].
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
}

/// Persisted state of an organization role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleState {
    pub id: String,
    pub organization_id: String,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    /// Server-computed classification.
    pub role_type: Option<String>,
    /// Server-computed grants. Always an explicit sequence — an empty
    /// grant list stays an empty list, never an absent marker, so diffs
    /// are stable.
    pub permissions: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Reconciliation handler for organization roles.
#[derive(Debug, Default)]
pub struct RoleResource;

fn validate_slug(slug: &str) -> Result<()> {
    if !slug.starts_with(ROLE_SLUG_PREFIX) {
        return Err(ProviderError::Validation {
            attribute: "slug",
            message: format!("role slugs must start with {ROLE_SLUG_PREFIX:?}, got {slug:?}"),
        });
    }
    Ok(())
}

fn state_from_response(prior_organization_id: &str, role: OrganizationRole) -> RoleState {
    RoleState {
        id: role.id,
        organization_id: prior_organization_id.to_string(),
        slug: role.slug,
        name: role.name,
        description: non_empty(role.description),
        role_type: non_empty(role.role_type),
        permissions: role.permissions,
        created_at: Some(role.created_at),
        updated_at: Some(role.updated_at),
    }
}

#[async_trait]
impl ManagedResource for RoleResource {
    type Config = RoleConfig;
    type State = RoleState;

    fn type_name(&self) -> &'static str {
        "halcyon_organization_role"
    }

    async fn create(&self, client: &ApiClient, config: &Self::Config) -> Result<Self::State> {
        validate_slug(&config.slug)?;

        debug!(
            organization_id = %config.organization_id,
            slug = %config.slug,
            "creating organization role"
        );

        let req = CreateOrganizationRole {
            slug: config.slug.clone(),
            name: config.name.clone(),
            description: config.description.clone(),
        };
        let role = client
            .create_organization_role(&config.organization_id, &req)
            .await?;

        info!(id = %role.id, slug = %role.slug, "created organization role");

        Ok(state_from_response(&config.organization_id, role))
    }

    async fn read(&self, client: &ApiClient, prior: &Self::State) -> Result<Option<Self::State>> {
        debug!(
            organization_id = %prior.organization_id,
            slug = %prior.slug,
            "reading organization role"
        );

        let role = match client
            .get_organization_role(&prior.organization_id, &prior.slug)
            .await
        {
            Ok(role) => role,
            Err(e) if e.is_not_found() => {
                info!(
                    organization_id = %prior.organization_id,
                    slug = %prior.slug,
                    "organization role gone from remote, dropping from state"
                );
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Some(state_from_response(&prior.organization_id, role)))
    }

    async fn update(
        &self,
        client: &ApiClient,
        prior: &Self::State,
        config: &Self::Config,
    ) -> Result<Self::State> {
        // Nothing the API accepts on write has changed: skip the call
        // entirely rather than churn `updated_at` remotely.
        if config.name == prior.name && config.description == prior.description {
            debug!(
                organization_id = %prior.organization_id,
                slug = %prior.slug,
                "organization role unchanged, skipping update"
            );
            return Ok(prior.clone());
        }

        debug!(
            organization_id = %prior.organization_id,
            slug = %prior.slug,
            "updating organization role"
        );

        let req = UpdateOrganizationRole {
            name: config.name.clone(),
            description: config.description.clone(),
        };
        let role = client
            .update_organization_role(&prior.organization_id, &prior.slug, &req)
            .await?;

        info!(id = %role.id, slug = %role.slug, "updated organization role");

        Ok(RoleState {
            id: prior.id.clone(),
            organization_id: prior.organization_id.clone(),
            slug: prior.slug.clone(),
            name: config.name.clone(),
            description: non_empty(role.description),
            role_type: prior.role_type.clone(),
            permissions: role.permissions,
            created_at: prior.created_at,
            updated_at: Some(role.updated_at),
        })
    }

    async fn delete(&self, client: &ApiClient, prior: &Self::State) -> Result<()> {
        debug!(
            organization_id = %prior.organization_id,
            slug = %prior.slug,
            "deleting organization role"
        );

        match client
            .delete_organization_role(&prior.organization_id, &prior.slug)
            .await
        {
            Ok(()) => {
                info!(
                    organization_id = %prior.organization_id,
                    slug = %prior.slug,
                    "deleted organization role"
                );
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                info!(
                    organization_id = %prior.organization_id,
                    slug = %prior.slug,
                    "organization role already deleted"
                );
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Seeds state from an `organization_id/slug` composite identifier.
    /// Shape violations fail here, before any network call.
    fn import(&self, id: &str) -> Result<Imported<Self::State>> {
        let parts: Vec<&str> = id.split('/').collect();
        let [organization_id, slug] = parts.as_slice() else {
            return Err(ProviderError::InvalidImportId {
                given: id.to_string(),
                expected: "organization_id/slug",
            });
        };
        if organization_id.is_empty() || slug.is_empty() {
            return Err(ProviderError::InvalidImportId {
                given: id.to_string(),
                expected: "organization_id/slug",
            });
        }

        Ok(Imported::new(RoleState {
            id: String::new(),
            organization_id: (*organization_id).to_string(),
            slug: (*slug).to_string(),
            name: String::new(),
            description: None,
            role_type: None,
            permissions: Vec::new(),
            created_at: None,
            updated_at: None,
        }))
    }
}
