//! User reconciliation.
//!
//! `password` and `password_hash` are write-only: the API accepts them and
//! never returns them, so state simply retains whatever was last configured
//! instead of reconciling against a server value that does not exist.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use halcyon_client::models::{CreateUser, UpdateUser, User};
use halcyon_client::ApiClient;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;
use crate::lifecycle::{Imported, ManagedResource};
use crate::merge::{merge_preserving, non_empty};

/// Desired configuration for a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserConfig {
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Write-only; independent of `password_hash`.
    pub password: Option<String>,
    /// Write-only pre-hashed credential.
    pub password_hash: Option<String>,
    pub email_verified: bool,
}

/// Persisted state of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserState {
    pub id: String,
    pub email: String,
    pub email_verified: bool,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Retained from configuration; never returned by the API.
    pub password: Option<String>,
    /// Retained from configuration; never returned by the API.
    pub password_hash: Option<String>,
    /// Server-computed.
    pub profile_picture_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Reconciliation handler for users.
#[derive(Debug, Default)]
pub struct UserResource;

fn state_from_response(user: User, config: &UserConfig) -> UserState {
    UserState {
        id: user.id,
        email: user.email,
        email_verified: user.email_verified,
        first_name: merge_preserving(Some(&user.first_name), config.first_name.as_deref()),
        last_name: merge_preserving(Some(&user.last_name), config.last_name.as_deref()),
        password: config.password.clone(),
        password_hash: config.password_hash.clone(),
        profile_picture_url: non_empty(user.profile_picture_url),
        created_at: Some(user.created_at),
        updated_at: Some(user.updated_at),
    }
}

#[async_trait]
impl ManagedResource for UserResource {
    type Config = UserConfig;
    type State = UserState;

    fn type_name(&self) -> &'static str {
        "halcyon_user"
    }

    async fn create(&self, client: &ApiClient, config: &Self::Config) -> Result<Self::State> {
        debug!(email = %config.email, "creating user");

        let req = CreateUser {
            email: config.email.clone(),
            password: config.password.clone(),
            password_hash: config.password_hash.clone(),
            first_name: config.first_name.clone(),
            last_name: config.last_name.clone(),
            email_verified: config.email_verified,
        };
        let user = client.create_user(&req).await?;

        info!(id = %user.id, email = %user.email, "created user");

        Ok(state_from_response(user, config))
    }

    async fn read(&self, client: &ApiClient, prior: &Self::State) -> Result<Option<Self::State>> {
        debug!(id = %prior.id, "reading user");

        let user = match client.get_user(&prior.id).await {
            Ok(user) => user,
            Err(e) if e.is_not_found() => {
                info!(id = %prior.id, "user gone from remote, dropping from state");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Some(UserState {
            id: prior.id.clone(),
            email: user.email,
            email_verified: user.email_verified,
            first_name: non_empty(user.first_name),
            last_name: non_empty(user.last_name),
            // Write-only fields keep their last-configured values.
            password: prior.password.clone(),
            password_hash: prior.password_hash.clone(),
            profile_picture_url: non_empty(user.profile_picture_url),
            created_at: Some(user.created_at),
            updated_at: Some(user.updated_at),
        }))
    }

    async fn update(
        &self,
        client: &ApiClient,
        prior: &Self::State,
        config: &Self::Config,
    ) -> Result<Self::State> {
        debug!(id = %prior.id, email = %config.email, "updating user");

        // Changing the email resets verification server-side, so the
        // desired `email_verified` is re-asserted on every update even when
        // it did not change.
        let req = UpdateUser {
            email: (config.email != prior.email).then(|| config.email.clone()),
            first_name: if config.first_name != prior.first_name {
                config.first_name.clone()
            } else {
                None
            },
            last_name: if config.last_name != prior.last_name {
                config.last_name.clone()
            } else {
                None
            },
            email_verified: config.email_verified,
        };
        let user = client.update_user(&prior.id, &req).await?;

        info!(id = %user.id, "updated user");

        let mut state = state_from_response(user, config);
        state.created_at = prior.created_at;
        Ok(state)
    }

    async fn delete(&self, client: &ApiClient, prior: &Self::State) -> Result<()> {
        debug!(id = %prior.id, "deleting user");

        match client.delete_user(&prior.id).await {
            Ok(()) => {
                info!(id = %prior.id, "deleted user");
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                info!(id = %prior.id, "user already deleted");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn import(&self, id: &str) -> Result<Imported<Self::State>> {
        Ok(Imported::new(UserState {
            id: id.to_string(),
            email: String::new(),
            email_verified: false,
            first_name: None,
            last_name: None,
            password: None,
            password_hash: None,
            profile_picture_url: None,
            created_at: None,
            updated_at: None,
        })
        .with_warning(
            "password and password_hash cannot be read from the Halcyon API; \
             they will appear as drift unless re-supplied in configuration",
        ))
    }
}
