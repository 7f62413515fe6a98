//! Capability tags for remote resource families.
//!
//! Whether a family accepts writes is a property of the remote API
//! generation, not of this client. Encoding it as an associated constant
//! makes the constraint checkable at compile time instead of surfacing as a
//! runtime surprise: read-only families simply have no mutating methods on
//! [`crate::ApiClient`], and the tag here is what registries and tooling
//! consult.

/// What the current Halcyon API generation allows for a resource family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Create, read, update, and delete are all served.
    FullCrud,
    /// Only retrieval is served; changes go through the Halcyon management
    /// console.
    ReadOnly,
    /// The endpoint family is no longer served at all.
    Retired,
}

/// Descriptor for one remote resource family.
pub trait Family {
    /// Remote type name of the family.
    const NAME: &'static str;
    /// What the remote API currently allows for this family.
    const CAPABILITY: Capability;
}

/// Organizations: the tenant unit. Full lifecycle.
pub enum Organizations {}

impl Family for Organizations {
    const NAME: &'static str = "organization";
    const CAPABILITY: Capability = Capability::FullCrud;
}

/// User accounts. Full lifecycle.
pub enum Users {}

impl Family for Users {
    const NAME: &'static str = "user";
    const CAPABILITY: Capability = Capability::FullCrud;
}

/// Organization memberships. Full lifecycle (role changes excepted — see
/// the membership reconciliation handler).
pub enum Memberships {}

impl Family for Memberships {
    const NAME: &'static str = "organization_membership";
    const CAPABILITY: Capability = Capability::FullCrud;
}

/// Organization-scoped authorization roles. Full lifecycle, slug-addressed.
pub enum Roles {}

impl Family for Roles {
    const NAME: &'static str = "organization_role";
    const CAPABILITY: Capability = Capability::FullCrud;
}

/// SSO connections. Provisioned and configured through the management
/// console; the API only serves reads.
pub enum Connections {}

impl Family for Connections {
    const NAME: &'static str = "connection";
    const CAPABILITY: Capability = Capability::ReadOnly;
}

/// Directory-sync directories. Same read-only constraint as connections.
pub enum Directories {}

impl Family for Directories {
    const NAME: &'static str = "directory";
    const CAPABILITY: Capability = Capability::ReadOnly;
}

/// Webhook endpoints. The API no longer serves this family; the schema is
/// retained for historical configurations only.
pub enum Webhooks {}

impl Family for Webhooks {
    const NAME: &'static str = "webhook";
    const CAPABILITY: Capability = Capability::Retired;
}
