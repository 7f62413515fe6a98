//! SSO connection lookup.
//!
//! Connections are read-only in the current API generation; this lookup is
//! the only way the provider exposes them.

use async_trait::async_trait;
use halcyon_client::models::{Connection, ConnectionType};
use halcyon_client::ApiClient;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ProviderError, Result};
use crate::lifecycle::DataSource;

/// Selector for a connection: either `id`, or `organization_id` together
/// with `connection_type`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionQuery {
    pub id: Option<String>,
    pub organization_id: Option<String>,
    pub connection_type: Option<ConnectionType>,
}

/// Lookup handler for SSO connections.
#[derive(Debug, Default)]
pub struct ConnectionDataSource;

#[async_trait]
impl DataSource for ConnectionDataSource {
    type Query = ConnectionQuery;
    type Output = Connection;

    fn type_name(&self) -> &'static str {
        "halcyon_connection"
    }

    async fn read(&self, client: &ApiClient, query: &Self::Query) -> Result<Self::Output> {
        match (&query.id, &query.organization_id, query.connection_type) {
            (Some(id), None, None) => {
                debug!(id = %id, "looking up connection by id");
                Ok(client.get_connection(id).await?)
            }
            (None, Some(organization_id), Some(connection_type)) => {
                debug!(
                    organization_id = %organization_id,
                    connection_type = %connection_type,
                    "looking up connection by organization and type"
                );
                Ok(client
                    .find_connection(organization_id, connection_type)
                    .await?)
            }
            _ => Err(ProviderError::Validation {
                attribute: "id",
                message: "set either id, or organization_id together with connection_type".into(),
            }),
        }
    }
}
