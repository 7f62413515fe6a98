//! Webhook schema (historical).
//!
//! The Halcyon API no longer serves the webhook endpoint family — every
//! remote call would return not-found. The schema is retained so existing
//! configurations produce a clear, permanent error instead of a retry loop
//! or a confusing 404: each lifecycle operation fails locally with
//! [`ProviderError::Retired`] and never touches the network.

use std::collections::BTreeSet;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use halcyon_client::ApiClient;
use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};
use crate::lifecycle::{Imported, ManagedResource};

/// Event names the webhook family recognized while it was served.
pub const KNOWN_WEBHOOK_EVENTS: &[&str] = &[
    // Authentication events
    "authentication.email_verification_succeeded",
    "authentication.magic_auth_failed",
    "authentication.magic_auth_succeeded",
    "authentication.mfa_succeeded",
    "authentication.oauth_failed",
    "authentication.oauth_succeeded",
    "authentication.password_failed",
    "authentication.password_succeeded",
    "authentication.sso_failed",
    "authentication.sso_succeeded",
    // Connection events
    "connection.activated",
    "connection.deactivated",
    "connection.deleted",
    // Directory sync events
    "dsync.activated",
    "dsync.deleted",
    "dsync.group.created",
    "dsync.group.deleted",
    "dsync.group.updated",
    "dsync.user.created",
    "dsync.user.deleted",
    "dsync.user.updated",
    // Organization events
    "organization.created",
    "organization.deleted",
    "organization.updated",
    "organization_domain.verification_failed",
    "organization_domain.verified",
    // Organization membership events
    "organization_membership.added",
    "organization_membership.removed",
    "organization_membership.updated",
    // Role events
    "role.created",
    "role.deleted",
    "role.updated",
    // Session events
    "session.created",
    // User events
    "user.created",
    "user.deleted",
    "user.updated",
];

/// Whether an event name was part of the webhook event vocabulary.
#[must_use]
pub fn is_known_webhook_event(event: &str) -> bool {
    KNOWN_WEBHOOK_EVENTS.contains(&event)
}

/// Desired configuration for a webhook (historical).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookConfig {
    pub url: String,
    /// Signing secret. Write-only: it was accepted on create/update but
    /// never returned by reads.
    pub secret: Option<String>,
    pub enabled: bool,
    pub events: BTreeSet<String>,
}

impl WebhookConfig {
    /// Validates the configured shape against the historical vocabulary.
    pub fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(ProviderError::Validation {
                attribute: "url",
                message: "a webhook endpoint URL is required".into(),
            });
        }
        for event in &self.events {
            if !is_known_webhook_event(event) {
                return Err(ProviderError::Validation {
                    attribute: "events",
                    message: format!("unknown webhook event {event:?}"),
                });
            }
        }
        Ok(())
    }
}

/// Persisted state of a webhook (historical).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookState {
    pub id: String,
    pub url: String,
    pub secret: Option<String>,
    pub enabled: bool,
    pub events: BTreeSet<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Lifecycle handler for the retired webhook family.
#[derive(Debug, Default)]
pub struct WebhookResource;

#[async_trait]
impl ManagedResource for WebhookResource {
    type Config = WebhookConfig;
    type State = WebhookState;

    fn type_name(&self) -> &'static str {
        "halcyon_webhook"
    }

    async fn create(&self, _client: &ApiClient, config: &Self::Config) -> Result<Self::State> {
        config.validate()?;
        Err(ProviderError::Retired { family: "webhook" })
    }

    async fn read(&self, _client: &ApiClient, _prior: &Self::State) -> Result<Option<Self::State>> {
        Err(ProviderError::Retired { family: "webhook" })
    }

    async fn update(
        &self,
        _client: &ApiClient,
        _prior: &Self::State,
        config: &Self::Config,
    ) -> Result<Self::State> {
        config.validate()?;
        Err(ProviderError::Retired { family: "webhook" })
    }

    async fn delete(&self, _client: &ApiClient, _prior: &Self::State) -> Result<()> {
        Err(ProviderError::Retired { family: "webhook" })
    }

    fn import(&self, _id: &str) -> Result<Imported<Self::State>> {
        Err(ProviderError::Retired { family: "webhook" })
    }
}
