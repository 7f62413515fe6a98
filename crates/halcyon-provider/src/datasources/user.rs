//! User lookup.

use async_trait::async_trait;
use halcyon_client::models::User;
use halcyon_client::ApiClient;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ProviderError, Result};
use crate::lifecycle::DataSource;

/// Selector for a user: exactly one of `id` or `email`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserQuery {
    pub id: Option<String>,
    pub email: Option<String>,
}

/// Lookup handler for users.
#[derive(Debug, Default)]
pub struct UserDataSource;

#[async_trait]
impl DataSource for UserDataSource {
    type Query = UserQuery;
    type Output = User;

    fn type_name(&self) -> &'static str {
        "halcyon_user"
    }

    async fn read(&self, client: &ApiClient, query: &Self::Query) -> Result<Self::Output> {
        match (&query.id, &query.email) {
            (Some(id), None) => {
                debug!(id = %id, "looking up user by id");
                Ok(client.get_user(id).await?)
            }
            (None, Some(email)) => {
                debug!(email = %email, "looking up user by email");
                Ok(client.find_user_by_email(email).await?)
            }
            _ => Err(ProviderError::Validation {
                attribute: "id",
                message: "exactly one of id or email must be set".into(),
            }),
        }
    }
}
