//! Organization reconciliation.

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use halcyon_client::models::{CreateOrganization, DomainUpsert, Organization, UpdateOrganization};
use halcyon_client::ApiClient;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::lifecycle::{Imported, ManagedResource};

/// Desired configuration for an organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationConfig {
    /// Display name.
    pub name: String,
    /// Verified domains. `None` means domains are not managed — distinct
    /// from an empty set, which would still be a managed (empty) value.
    pub domains: Option<BTreeSet<String>>,
}

/// Persisted state of an organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationState {
    pub id: String,
    pub name: String,
    pub domains: Option<BTreeSet<String>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Reconciliation handler for organizations.
#[derive(Debug, Default)]
pub struct OrganizationResource;

/// Wraps each configured domain with the implicit verified state marker.
fn domain_payload(domains: &Option<BTreeSet<String>>) -> Vec<DomainUpsert> {
    domains
        .iter()
        .flatten()
        .map(|domain| DomainUpsert::verified(domain.clone()))
        .collect()
}

/// Flattens the response's domain-detail objects to their plain names. An
/// empty or absent list collapses to the explicit absent marker so a
/// round-trip of an unmanaged domain set produces no diff.
fn domains_from_response(org: &Organization) -> Option<BTreeSet<String>> {
    if org.domains.is_empty() {
        None
    } else {
        Some(org.domains.iter().map(|d| d.domain.clone()).collect())
    }
}

#[async_trait]
impl ManagedResource for OrganizationResource {
    type Config = OrganizationConfig;
    type State = OrganizationState;

    fn type_name(&self) -> &'static str {
        "halcyon_organization"
    }

    async fn create(&self, client: &ApiClient, config: &Self::Config) -> Result<Self::State> {
        debug!(name = %config.name, "creating organization");

        let req = CreateOrganization {
            name: config.name.clone(),
            domain_data: domain_payload(&config.domains),
        };
        let org = client.create_organization(&req).await?;

        info!(id = %org.id, name = %org.name, "created organization");

        Ok(OrganizationState {
            id: org.id,
            name: config.name.clone(),
            domains: config.domains.clone(),
            created_at: Some(org.created_at),
            updated_at: Some(org.updated_at),
        })
    }

    async fn read(&self, client: &ApiClient, prior: &Self::State) -> Result<Option<Self::State>> {
        debug!(id = %prior.id, "reading organization");

        let org = match client.get_organization(&prior.id).await {
            Ok(org) => org,
            Err(e) if e.is_not_found() => {
                info!(id = %prior.id, "organization gone from remote, dropping from state");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Some(OrganizationState {
            id: prior.id.clone(),
            name: org.name.clone(),
            domains: domains_from_response(&org),
            created_at: Some(org.created_at),
            updated_at: Some(org.updated_at),
        }))
    }

    async fn update(
        &self,
        client: &ApiClient,
        prior: &Self::State,
        config: &Self::Config,
    ) -> Result<Self::State> {
        debug!(id = %prior.id, name = %config.name, "updating organization");

        // The domain list is always re-sent in full; the API has no
        // incremental add/remove.
        let req = UpdateOrganization {
            name: config.name.clone(),
            domain_data: domain_payload(&config.domains),
        };
        let org = client.update_organization(&prior.id, &req).await?;

        info!(id = %prior.id, name = %org.name, "updated organization");

        Ok(OrganizationState {
            id: prior.id.clone(),
            name: config.name.clone(),
            domains: config.domains.clone(),
            created_at: prior.created_at,
            updated_at: Some(org.updated_at),
        })
    }

    async fn delete(&self, client: &ApiClient, prior: &Self::State) -> Result<()> {
        debug!(id = %prior.id, "deleting organization");

        match client.delete_organization(&prior.id).await {
            Ok(()) => {
                info!(id = %prior.id, "deleted organization");
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                info!(id = %prior.id, "organization already deleted");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn import(&self, id: &str) -> Result<Imported<Self::State>> {
        Ok(Imported::new(OrganizationState {
            id: id.to_string(),
            name: String::new(),
            domains: None,
            created_at: None,
            updated_at: None,
        }))
    }
}
