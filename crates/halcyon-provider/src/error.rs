//! Provider-level error type.
//!
//! Wraps the client taxonomy and adds the failures that originate locally:
//! input validation, malformed import identifiers, and operations against
//! retired endpoint families.

use thiserror::Error;

/// Error returned by reconciliation handlers and data sources.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The API client failed; carries the full taxonomy.
    #[error(transparent)]
    Client(#[from] halcyon_client::Error),

    /// A configured value was rejected before any network call.
    #[error("invalid value for {attribute}: {message}")]
    Validation {
        attribute: &'static str,
        message: String,
    },

    /// An import identifier did not match the expected shape.
    #[error("invalid import identifier {given:?}: expected {expected}")]
    InvalidImportId {
        given: String,
        expected: &'static str,
    },

    /// The endpoint family is permanently gone from the remote API. Not
    /// retryable; the configuration itself must change.
    #[error(
        "{family} resources are no longer served by the Halcyon API; \
         remove them from configuration"
    )]
    Retired { family: &'static str },
}

/// Result alias for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;

impl ProviderError {
    /// True when the underlying API response was a not-found. Read and
    /// delete paths recover from this; everything else surfaces it.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, ProviderError::Client(e) if e.is_not_found())
    }

    /// True when the failure is local input validation — no request was
    /// ever sent.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ProviderError::Validation { .. } | ProviderError::InvalidImportId { .. }
        )
    }
}
