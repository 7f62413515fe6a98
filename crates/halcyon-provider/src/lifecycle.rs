//! Host lifecycle contract.
//!
//! The host orchestrator owns planning, diffing, and state persistence; this
//! crate answers its lifecycle calls. Each managed kind implements
//! [`ManagedResource`], each lookup kind implements [`DataSource`], and the
//! static registry enumerates what exists — no dynamic loading, the "plugin"
//! boundary is an ordinary trait.
//!
//! Scheduling contract: the host never runs two operations on the same
//! resource instance concurrently, but distinct instances may run in
//! parallel over one shared [`ApiClient`]. Every operation resolves fully
//! (success, definitive error, or cancellation by drop) before returning.

use async_trait::async_trait;
use halcyon_client::capability::{
    Capability, Connections, Directories, Family, Memberships, Organizations, Roles, Users,
    Webhooks,
};
use halcyon_client::ApiClient;

use crate::error::Result;

/// One registered resource or data-source kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceKind {
    /// Type name the host addresses this kind by.
    pub type_name: &'static str,
    /// What the remote API currently allows for the kind.
    pub capability: Capability,
}

/// The managed resource kinds this provider serves, in registration order.
#[must_use]
pub fn resource_kinds() -> &'static [ResourceKind] {
    const KINDS: &[ResourceKind] = &[
        ResourceKind {
            type_name: "halcyon_organization",
            capability: Organizations::CAPABILITY,
        },
        ResourceKind {
            type_name: "halcyon_user",
            capability: Users::CAPABILITY,
        },
        ResourceKind {
            type_name: "halcyon_organization_membership",
            capability: Memberships::CAPABILITY,
        },
        ResourceKind {
            type_name: "halcyon_organization_role",
            capability: Roles::CAPABILITY,
        },
        ResourceKind {
            type_name: "halcyon_webhook",
            capability: Webhooks::CAPABILITY,
        },
    ];
    KINDS
}

/// The data-source kinds this provider serves.
#[must_use]
pub fn data_source_kinds() -> &'static [ResourceKind] {
    const KINDS: &[ResourceKind] = &[
        ResourceKind {
            type_name: "halcyon_organization",
            capability: Organizations::CAPABILITY,
        },
        ResourceKind {
            type_name: "halcyon_connection",
            capability: Connections::CAPABILITY,
        },
        ResourceKind {
            type_name: "halcyon_directory",
            capability: Directories::CAPABILITY,
        },
        ResourceKind {
            type_name: "halcyon_directory_user",
            capability: Directories::CAPABILITY,
        },
        ResourceKind {
            type_name: "halcyon_directory_group",
            capability: Directories::CAPABILITY,
        },
        ResourceKind {
            type_name: "halcyon_user",
            capability: Users::CAPABILITY,
        },
        ResourceKind {
            type_name: "halcyon_organization_role",
            capability: Roles::CAPABILITY,
        },
    ];
    KINDS
}

/// State seeded by an import, plus anything the operator must be told.
#[derive(Debug, Clone, PartialEq)]
pub struct Imported<S> {
    /// The seeded state; a follow-up read populates the rest.
    pub state: S,
    /// Operator-facing caveats (e.g. write-only fields that cannot be
    /// recovered).
    pub warnings: Vec<String>,
}

impl<S> Imported<S> {
    /// Seeds an import with no warnings.
    #[must_use]
    pub fn new(state: S) -> Self {
        Self {
            state,
            warnings: Vec::new(),
        }
    }

    /// Attaches an operator-facing warning.
    #[must_use]
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }
}

/// Lifecycle of one managed resource kind.
///
/// The remote API is authoritative: every mutation re-derives state from the
/// response, and `read` returning `Ok(None)` means the remote resource is
/// gone and must be dropped from persisted state (triggering recreation on
/// the next plan) — never treated as an error.
#[async_trait]
pub trait ManagedResource: Send + Sync {
    /// Desired configuration, as resolved by the host.
    type Config: Send + Sync;
    /// Persisted state owned by the host.
    type State: Send + Sync;

    /// Type name the host addresses this kind by.
    fn type_name(&self) -> &'static str;

    /// Create the remote resource from desired configuration.
    async fn create(&self, client: &ApiClient, config: &Self::Config) -> Result<Self::State>;

    /// Refresh state from the remote API. `Ok(None)` drops the resource
    /// from persisted state.
    async fn read(&self, client: &ApiClient, prior: &Self::State) -> Result<Option<Self::State>>;

    /// Reconcile desired configuration against the remote resource.
    async fn update(
        &self,
        client: &ApiClient,
        prior: &Self::State,
        config: &Self::Config,
    ) -> Result<Self::State>;

    /// Destroy the remote resource. Not-found means already deleted and is
    /// success.
    async fn delete(&self, client: &ApiClient, prior: &Self::State) -> Result<()>;

    /// Seed state from an externally supplied identifier. Purely local —
    /// a follow-up read performs the first fetch.
    fn import(&self, id: &str) -> Result<Imported<Self::State>>;
}

/// Lifecycle of one read-only lookup kind.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Lookup selector.
    type Query: Send + Sync;
    /// Fetched entity.
    type Output: Send;

    /// Type name the host addresses this kind by.
    fn type_name(&self) -> &'static str;

    /// Fetch the entity matching the selector. Zero matches surfaces as a
    /// not-found error.
    async fn read(&self, client: &ApiClient, query: &Self::Query) -> Result<Self::Output>;
}
