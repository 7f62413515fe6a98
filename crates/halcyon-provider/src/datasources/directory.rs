//! Directory lookup.

use async_trait::async_trait;
use halcyon_client::models::Directory;
use halcyon_client::ApiClient;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ProviderError, Result};
use crate::lifecycle::DataSource;

/// Selector for a directory: exactly one of `id` or `organization_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryQuery {
    pub id: Option<String>,
    pub organization_id: Option<String>,
}

/// Lookup handler for directories.
#[derive(Debug, Default)]
pub struct DirectoryDataSource;

#[async_trait]
impl DataSource for DirectoryDataSource {
    type Query = DirectoryQuery;
    type Output = Directory;

    fn type_name(&self) -> &'static str {
        "halcyon_directory"
    }

    async fn read(&self, client: &ApiClient, query: &Self::Query) -> Result<Self::Output> {
        match (&query.id, &query.organization_id) {
            (Some(id), None) => {
                debug!(id = %id, "looking up directory by id");
                Ok(client.get_directory(id).await?)
            }
            (None, Some(organization_id)) => {
                debug!(organization_id = %organization_id, "looking up directory by organization");
                Ok(client.find_directory_by_organization(organization_id).await?)
            }
            _ => Err(ProviderError::Validation {
                attribute: "id",
                message: "exactly one of id or organization_id must be set".into(),
            }),
        }
    }
}
