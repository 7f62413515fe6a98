//! Wire models for the Halcyon API.
//!
//! All identifiers are opaque strings issued by the remote service; the
//! client never mints one. Write-only attributes (passwords, hashes) exist
//! only on request types — the API never echoes them back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cursor metadata returned by every list endpoint.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ListMetadata {
    /// Cursor pointing before the first returned item.
    #[serde(default)]
    pub before: Option<String>,
    /// Cursor pointing after the last returned item.
    #[serde(default)]
    pub after: Option<String>,
}

/// One page of a list endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub list_metadata: ListMetadata,
}

// ── Organizations ─────────────────────────────────────────────────────────

/// An organization, the tenant unit of the Halcyon platform.
#[derive(Debug, Clone, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    /// Verified domains attached to the organization. Absent or empty when
    /// none are configured.
    #[serde(default)]
    pub domains: Vec<OrganizationDomain>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A domain record attached to an organization.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationDomain {
    #[serde(default)]
    pub id: String,
    pub domain: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub organization_id: String,
}

/// Domain payload for organization writes. Domains managed declaratively
/// are always submitted in the verified state.
#[derive(Debug, Clone, Serialize)]
pub struct DomainUpsert {
    pub domain: String,
    pub state: &'static str,
}

impl DomainUpsert {
    /// Wraps a plain domain name in the verified state marker.
    #[must_use]
    pub fn verified(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            state: "verified",
        }
    }
}

/// Request body for creating an organization.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrganization {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub domain_data: Vec<DomainUpsert>,
}

/// Request body for updating an organization. The domain list is a full
/// replacement — there is no incremental add/remove.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateOrganization {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub domain_data: Vec<DomainUpsert>,
}

// ── SSO connections ───────────────────────────────────────────────────────

/// The fixed set of connection protocols Halcyon supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionType {
    #[serde(rename = "OktaSAML")]
    OktaSaml,
    #[serde(rename = "AzureSAML")]
    AzureSaml,
    #[serde(rename = "GoogleSAML")]
    GoogleSaml,
    #[serde(rename = "OneLoginSAML")]
    OneLoginSaml,
    #[serde(rename = "PingFederateSAML")]
    PingFederateSaml,
    #[serde(rename = "PingOneSAML")]
    PingOneSaml,
    #[serde(rename = "JumpCloudSAML")]
    JumpCloudSaml,
    #[serde(rename = "GenericSAML")]
    GenericSaml,
    #[serde(rename = "GoogleOAuth")]
    GoogleOauth,
    #[serde(rename = "MicrosoftOAuth")]
    MicrosoftOauth,
    #[serde(rename = "GenericOIDC")]
    GenericOidc,
}

impl ConnectionType {
    /// The wire name of this connection type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionType::OktaSaml => "OktaSAML",
            ConnectionType::AzureSaml => "AzureSAML",
            ConnectionType::GoogleSaml => "GoogleSAML",
            ConnectionType::OneLoginSaml => "OneLoginSAML",
            ConnectionType::PingFederateSaml => "PingFederateSAML",
            ConnectionType::PingOneSaml => "PingOneSAML",
            ConnectionType::JumpCloudSaml => "JumpCloudSAML",
            ConnectionType::GenericSaml => "GenericSAML",
            ConnectionType::GoogleOauth => "GoogleOAuth",
            ConnectionType::MicrosoftOauth => "MicrosoftOAuth",
            ConnectionType::GenericOidc => "GenericOIDC",
        }
    }
}

impl std::fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An SSO connection between an organization and its identity provider.
///
/// Connections are read-only through this API generation; protocol
/// configuration happens in the Halcyon management console.
#[derive(Debug, Clone, Deserialize)]
pub struct Connection {
    pub id: String,
    pub organization_id: String,
    pub connection_type: ConnectionType,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub saml: Option<SamlConfiguration>,
    #[serde(default)]
    pub oidc: Option<OidcConfiguration>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// SAML protocol details of a connection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SamlConfiguration {
    #[serde(default)]
    pub idp_entity_id: String,
    #[serde(default)]
    pub idp_sso_url: String,
    #[serde(default)]
    pub sp_entity_id: String,
    #[serde(default)]
    pub sp_acs_url: String,
}

/// OIDC protocol details of a connection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OidcConfiguration {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub redirect_uri: String,
}

// ── Directory sync ────────────────────────────────────────────────────────

/// A directory-sync directory. Read-only through this API generation.
#[derive(Debug, Clone, Deserialize)]
pub struct Directory {
    pub id: String,
    pub organization_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub directory_type: String,
    #[serde(default)]
    pub state: String,
    /// SCIM bearer token. Server-generated, returned only at provisioning
    /// time and never re-derivable afterwards.
    #[serde(default)]
    pub bearer_token: Option<String>,
    /// SCIM endpoint URL for the directory.
    #[serde(default)]
    pub endpoint: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user projected from directory sync. Fetch-only.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryUser {
    pub id: String,
    pub directory_id: String,
    #[serde(default)]
    pub organization_id: String,
    #[serde(default)]
    pub idp_id: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub custom_attributes: serde_json::Map<String, serde_json::Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A group projected from directory sync. Fetch-only.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryGroup {
    pub id: String,
    pub directory_id: String,
    #[serde(default)]
    pub organization_id: String,
    #[serde(default)]
    pub idp_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ── Users ─────────────────────────────────────────────────────────────────

/// A Halcyon user account.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub email_verified: bool,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    /// Server-computed avatar URL; never writable.
    #[serde(default)]
    pub profile_picture_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating a user. `password` and `password_hash` are
/// write-only and independent of each other.
#[derive(Debug, Clone, Serialize)]
pub struct CreateUser {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub email_verified: bool,
}

/// Request body for updating a user.
///
/// `email_verified` is deliberately not optional: changing the email address
/// resets verification server-side, so every update re-asserts the desired
/// value even when it did not change.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub email_verified: bool,
}

// ── Organization memberships ──────────────────────────────────────────────

/// A user's membership in an organization.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationMembership {
    pub id: String,
    pub user_id: String,
    pub organization_id: String,
    /// The assigned role. The API accepts this on create but does not
    /// reliably echo it back; callers must not treat an absent value as a
    /// removal.
    #[serde(default)]
    pub role_slug: Option<String>,
    #[serde(default)]
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating an organization membership.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrganizationMembership {
    pub user_id: String,
    pub organization_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_slug: Option<String>,
}

// ── Organization roles ────────────────────────────────────────────────────

/// An authorization role scoped to an organization. Role endpoints are
/// addressed by `(organization_id, slug)`, not by the opaque id.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationRole {
    pub id: String,
    #[serde(default)]
    pub organization_id: String,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Server-computed role classification.
    #[serde(rename = "type", default)]
    pub role_type: String,
    /// Server-computed permission grants; never sent on writes.
    #[serde(default)]
    pub permissions: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request body for creating an organization role. Permissions and type are
/// server-computed and intentionally absent.
#[derive(Debug, Clone, Serialize)]
pub struct CreateOrganizationRole {
    pub slug: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request body for updating an organization role.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateOrganizationRole {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
