//! Reconciliation core of the Halcyon infrastructure-as-code provider.
//!
//! The host orchestrator resolves configuration, plans changes, and persists
//! state; this crate answers its lifecycle calls. Data flows one direction
//! per operation: desired state → reconciliation handler → entity client →
//! remote API, with the response merged back into the state the host
//! persists. The remote API is authoritative throughout — persisted state is
//! a cache reconciled on every cycle, and a resource that vanished remotely
//! is dropped from state rather than reported as an error.
//!
//! # Modules
//!
//! - [`config`] — provider configuration and environment resolution
//! - [`lifecycle`] — host contract traits and the static kind registry
//! - [`merge`] — the shared three-state merge for lossy API responses
//! - [`resources`] — Create/Read/Update/Delete/Import handlers
//! - [`datasources`] — read-only lookups

pub mod config;
pub mod datasources;
pub mod error;
pub mod lifecycle;
pub mod merge;
pub mod resources;

pub use config::ProviderConfig;
pub use error::{ProviderError, Result};
pub use lifecycle::{data_source_kinds, resource_kinds, DataSource, Imported, ManagedResource};
