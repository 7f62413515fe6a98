//! Directory-group lookup. Fetch-only projection of directory-sync data.

use async_trait::async_trait;
use halcyon_client::models::DirectoryGroup;
use halcyon_client::ApiClient;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ProviderError, Result};
use crate::lifecycle::DataSource;

/// Selector for a directory group: either `id`, or `directory_id` together
/// with `name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryGroupQuery {
    pub id: Option<String>,
    pub directory_id: Option<String>,
    pub name: Option<String>,
}

/// Lookup handler for directory groups.
#[derive(Debug, Default)]
pub struct DirectoryGroupDataSource;

#[async_trait]
impl DataSource for DirectoryGroupDataSource {
    type Query = DirectoryGroupQuery;
    type Output = DirectoryGroup;

    fn type_name(&self) -> &'static str {
        "halcyon_directory_group"
    }

    async fn read(&self, client: &ApiClient, query: &Self::Query) -> Result<Self::Output> {
        match (&query.id, &query.directory_id, &query.name) {
            (Some(id), None, None) => {
                debug!(id = %id, "looking up directory group by id");
                Ok(client.get_directory_group(id).await?)
            }
            (None, Some(directory_id), Some(name)) => {
                debug!(
                    directory_id = %directory_id,
                    name = %name,
                    "looking up directory group by name"
                );
                Ok(client
                    .find_directory_group_by_name(directory_id, name)
                    .await?)
            }
            _ => Err(ProviderError::Validation {
                attribute: "id",
                message: "set either id, or directory_id together with name".into(),
            }),
        }
    }
}
