//! Provider configuration.
//!
//! Three values configure the provider: the API key (secret, required), an
//! optional client identifier, and an optional base URL. Each resolves from
//! explicit configuration first, then from its environment variable.

use std::env;
use std::fmt;

use halcyon_client::ApiClient;
use tracing::debug;

use crate::error::{ProviderError, Result};

/// Environment fallback for the API key.
pub const ENV_API_KEY: &str = "HALCYON_API_KEY";
/// Environment fallback for the client identifier.
pub const ENV_CLIENT_ID: &str = "HALCYON_CLIENT_ID";
/// Environment fallback for the base URL.
pub const ENV_BASE_URL: &str = "HALCYON_BASE_URL";

/// Raw provider configuration as supplied by the host. `None` (or an empty
/// string) defers to the corresponding environment variable.
#[derive(Clone, Default)]
pub struct ProviderConfig {
    /// Halcyon API key (starts with `sk_`). Secret.
    pub api_key: Option<String>,
    /// Optional client identifier.
    pub client_id: Option<String>,
    /// API base URL; defaults to the production endpoint.
    pub base_url: Option<String>,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The API key is secret and stays out of debug output.
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("client_id", &self.client_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ProviderConfig {
    /// Resolve the configuration and build the shared [`ApiClient`] handed
    /// to every resource and data source at configure time.
    pub fn connect(self) -> Result<ApiClient> {
        let api_key = resolve(self.api_key, ENV_API_KEY);
        let client_id = resolve(self.client_id, ENV_CLIENT_ID);
        let base_url = resolve(self.base_url, ENV_BASE_URL);

        let Some(api_key) = api_key else {
            return Err(ProviderError::Validation {
                attribute: "api_key",
                message: format!(
                    "missing Halcyon API key: set api_key in the provider \
                     configuration or the {ENV_API_KEY} environment variable"
                ),
            });
        };

        debug!(
            base_url = base_url.as_deref().unwrap_or(halcyon_client::DEFAULT_BASE_URL),
            client_id = client_id.as_deref().unwrap_or_default(),
            "configuring Halcyon client"
        );

        Ok(ApiClient::new(api_key, client_id, base_url)?)
    }
}

/// Explicit configuration wins; empty strings count as unset.
fn resolve(explicit: Option<String>, env_var: &str) -> Option<String> {
    explicit
        .filter(|v| !v.is_empty())
        .or_else(|| env::var(env_var).ok().filter(|v| !v.is_empty()))
}
