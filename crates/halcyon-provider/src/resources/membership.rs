//! Organization-membership reconciliation.
//!
//! The API accepts `role_slug` on create but does not reliably echo it back
//! even when applied, so every response passes through the three-state
//! merge. There is no membership-mutation endpoint: `user_id` and
//! `organization_id` are replace-only (the host plans delete+recreate), and
//! update re-reads remote state instead of writing.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use halcyon_client::models::CreateOrganizationMembership;
use halcyon_client::ApiClient;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::lifecycle::{Imported, ManagedResource};
use crate::merge::{merge_preserving, non_empty};

/// Desired configuration for a membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipConfig {
    pub user_id: String,
    pub organization_id: String,
    /// Role to assign within the organization.
    pub role_slug: Option<String>,
}

/// Persisted state of a membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipState {
    pub id: String,
    pub user_id: String,
    pub organization_id: String,
    pub role_slug: Option<String>,
    /// Server-computed (`active`, `inactive`, `pending`).
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Reconciliation handler for organization memberships.
#[derive(Debug, Default)]
pub struct MembershipResource;

#[async_trait]
impl ManagedResource for MembershipResource {
    type Config = MembershipConfig;
    type State = MembershipState;

    fn type_name(&self) -> &'static str {
        "halcyon_organization_membership"
    }

    async fn create(&self, client: &ApiClient, config: &Self::Config) -> Result<Self::State> {
        debug!(
            user_id = %config.user_id,
            organization_id = %config.organization_id,
            "creating organization membership"
        );

        let req = CreateOrganizationMembership {
            user_id: config.user_id.clone(),
            organization_id: config.organization_id.clone(),
            role_slug: config.role_slug.clone(),
        };
        let membership = client.create_organization_membership(&req).await?;

        info!(
            id = %membership.id,
            user_id = %membership.user_id,
            organization_id = %membership.organization_id,
            "created organization membership"
        );

        Ok(MembershipState {
            id: membership.id,
            user_id: membership.user_id,
            organization_id: membership.organization_id,
            role_slug: merge_preserving(
                membership.role_slug.as_deref(),
                config.role_slug.as_deref(),
            ),
            status: non_empty(membership.status),
            created_at: Some(membership.created_at),
            updated_at: Some(membership.updated_at),
        })
    }

    async fn read(&self, client: &ApiClient, prior: &Self::State) -> Result<Option<Self::State>> {
        debug!(id = %prior.id, "reading organization membership");

        let membership = match client.get_organization_membership(&prior.id).await {
            Ok(m) => m,
            Err(e) if e.is_not_found() => {
                info!(id = %prior.id, "membership gone from remote, dropping from state");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Some(MembershipState {
            id: prior.id.clone(),
            user_id: membership.user_id,
            organization_id: membership.organization_id,
            role_slug: merge_preserving(
                membership.role_slug.as_deref(),
                prior.role_slug.as_deref(),
            ),
            status: non_empty(membership.status),
            created_at: Some(membership.created_at),
            updated_at: Some(membership.updated_at),
        }))
    }

    async fn update(
        &self,
        client: &ApiClient,
        prior: &Self::State,
        config: &Self::Config,
    ) -> Result<Self::State> {
        // No write: the API has no membership-mutation endpoint. Re-fetch
        // and reapply the role rule against the desired value.
        debug!(id = %prior.id, "refreshing organization membership (no mutation endpoint)");

        let membership = client.get_organization_membership(&prior.id).await?;

        Ok(MembershipState {
            id: prior.id.clone(),
            user_id: membership.user_id,
            organization_id: membership.organization_id,
            role_slug: merge_preserving(
                membership.role_slug.as_deref(),
                config.role_slug.as_deref(),
            ),
            status: non_empty(membership.status),
            created_at: prior.created_at,
            updated_at: Some(membership.updated_at),
        })
    }

    async fn delete(&self, client: &ApiClient, prior: &Self::State) -> Result<()> {
        debug!(id = %prior.id, "deleting organization membership");

        match client.delete_organization_membership(&prior.id).await {
            Ok(()) => {
                info!(id = %prior.id, "deleted organization membership");
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                info!(id = %prior.id, "organization membership already deleted");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn import(&self, id: &str) -> Result<Imported<Self::State>> {
        Ok(Imported::new(MembershipState {
            id: id.to_string(),
            user_id: String::new(),
            organization_id: String::new(),
            role_slug: None,
            status: None,
            created_at: None,
            updated_at: None,
        }))
    }
}
