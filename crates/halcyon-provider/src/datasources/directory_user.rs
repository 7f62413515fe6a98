//! Directory-user lookup. Fetch-only projection of directory-sync data.

use async_trait::async_trait;
use halcyon_client::models::DirectoryUser;
use halcyon_client::ApiClient;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ProviderError, Result};
use crate::lifecycle::DataSource;

/// Selector for a directory user: either `id`, or `directory_id` together
/// with `email`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryUserQuery {
    pub id: Option<String>,
    pub directory_id: Option<String>,
    pub email: Option<String>,
}

/// Lookup handler for directory users.
#[derive(Debug, Default)]
pub struct DirectoryUserDataSource;

#[async_trait]
impl DataSource for DirectoryUserDataSource {
    type Query = DirectoryUserQuery;
    type Output = DirectoryUser;

    fn type_name(&self) -> &'static str {
        "halcyon_directory_user"
    }

    async fn read(&self, client: &ApiClient, query: &Self::Query) -> Result<Self::Output> {
        match (&query.id, &query.directory_id, &query.email) {
            (Some(id), None, None) => {
                debug!(id = %id, "looking up directory user by id");
                Ok(client.get_directory_user(id).await?)
            }
            (None, Some(directory_id), Some(email)) => {
                debug!(
                    directory_id = %directory_id,
                    email = %email,
                    "looking up directory user by email"
                );
                Ok(client
                    .find_directory_user_by_email(directory_id, email)
                    .await?)
            }
            _ => Err(ProviderError::Validation {
                attribute: "id",
                message: "set either id, or directory_id together with email".into(),
            }),
        }
    }
}
