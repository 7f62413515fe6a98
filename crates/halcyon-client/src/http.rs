//! HTTP transport for the Halcyon API (reqwest-based).
//!
//! Issues bearer-authenticated JSON requests, retries rate-limited calls
//! with `Retry-After`-aware backoff, and normalizes non-2xx responses into
//! the error taxonomy. Knows nothing about specific resource families.

use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use reqwest::header::{HeaderMap, AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER, USER_AGENT};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{ApiError, Error, Result};

/// Default production endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.halcyon.io";

/// Request timeout applied to every call.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum retry attempts after a 429, beyond the initial request.
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff when no `Retry-After` is present.
const BASE_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Cap on the computed backoff delay (jitter is added on top).
const MAX_RETRY_DELAY: Duration = Duration::from_secs(30);

const USER_AGENT_VALUE: &str = concat!("halcyon-provider/", env!("CARGO_PKG_VERSION"));

/// Halcyon API client.
///
/// Cheap to clone and safe to share across concurrently running resource
/// operations: the credential and base URL are read-only after construction
/// and the underlying `reqwest::Client` pools connections internally.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    api_key: String,
    client_id: Option<String>,
    base_url: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The API key must never escape into logs or debug output.
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new client.
    ///
    /// `base_url` falls back to [`DEFAULT_BASE_URL`] when `None`; a trailing
    /// slash is normalized off. An empty API key is rejected here rather
    /// than surfacing as a 401 on first use.
    pub fn new(
        api_key: impl Into<String>,
        client_id: Option<String>,
        base_url: Option<String>,
    ) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(Error::InvalidConfig("api_key is required".into()));
        }

        let base_url = base_url
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = base_url.trim_end_matches('/').to_string();

        let http = reqwest::Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| Error::InvalidConfig(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key,
            client_id,
            base_url,
        })
    }

    /// The configured base URL, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The optional client identifier supplied at configuration time.
    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// Issue a request and return the raw response.
    ///
    /// Handles the rate-limit retry loop: a 429 is retried up to
    /// [`MAX_RETRIES`] times, re-sending the exact same body bytes each
    /// attempt. When retries are exhausted the final 429 response is
    /// returned as-is so it classifies uniformly with any other HTTP error.
    ///
    /// Dropping the returned future aborts an in-flight backoff sleep.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&[u8]>,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url, path);
        let mut attempt: u32 = 0;
        loop {
            let mut request = self
                .http
                .request(method.clone(), &url)
                .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
                .header(CONTENT_TYPE, "application/json")
                .header(USER_AGENT, USER_AGENT_VALUE);
            if let Some(bytes) = body {
                request = request.body(bytes.to_vec());
            }

            debug!(%method, path, attempt, "sending request");
            let response = request.send().await?;

            if response.status() == StatusCode::TOO_MANY_REQUESTS && attempt < MAX_RETRIES {
                let delay = retry_delay(response.headers(), attempt);
                warn!(
                    path,
                    attempt = attempt + 1,
                    max_retries = MAX_RETRIES,
                    delay_ms = delay.as_millis() as u64,
                    "rate limited, backing off before retry"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
                continue;
            }

            return Ok(response);
        }
    }

    /// GET `path` and decode the response.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.send(Method::GET, path, None).await?;
        decode_response(response).await
    }

    /// POST `body` to `path` and decode the response.
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let bytes = serde_json::to_vec(body).map_err(Error::Encode)?;
        let response = self.send(Method::POST, path, Some(&bytes)).await?;
        decode_response(response).await
    }

    /// PUT `body` to `path` and decode the response.
    pub async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let bytes = serde_json::to_vec(body).map_err(Error::Encode)?;
        let response = self.send(Method::PUT, path, Some(&bytes)).await?;
        decode_response(response).await
    }

    /// PATCH `body` to `path` and decode the response.
    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let bytes = serde_json::to_vec(body).map_err(Error::Encode)?;
        let response = self.send(Method::PATCH, path, Some(&bytes)).await?;
        decode_response(response).await
    }

    /// DELETE `path`. An empty 2xx body is success; nothing is decoded.
    pub async fn delete(&self, path: &str) -> Result<()> {
        let response = self.send(Method::DELETE, path, None).await?;
        expect_success(response).await
    }
}

/// How long to wait before retrying a rate-limited request.
///
/// A numeric `Retry-After` is honored exactly. An HTTP-date `Retry-After`
/// becomes the delta to now, floored at zero. Otherwise exponential backoff
/// `base * 2^attempt` capped at [`MAX_RETRY_DELAY`], with up to 25% jitter
/// added on top — never subtracted, so the wait cannot dip below the
/// computed base.
fn retry_delay(headers: &HeaderMap, attempt: u32) -> Duration {
    if let Some(value) = headers.get(RETRY_AFTER).and_then(|v| v.to_str().ok()) {
        if let Ok(secs) = value.trim().parse::<u64>() {
            return Duration::from_secs(secs);
        }
        if let Ok(at) = chrono::DateTime::parse_from_rfc2822(value) {
            return (at.with_timezone(&Utc) - Utc::now())
                .to_std()
                .unwrap_or(Duration::ZERO);
        }
    }

    let capped = BASE_RETRY_DELAY
        .saturating_mul(2u32.saturating_pow(attempt))
        .min(MAX_RETRY_DELAY);
    let jitter_ms = rand::thread_rng().gen_range(0..=capped.as_millis() as u64 / 4);
    capped + Duration::from_millis(jitter_ms)
}

/// Percent-encode query parameters for a request path.
pub(crate) fn encode_query(params: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params)
        .finish()
}

async fn decode_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let bytes = response.bytes().await?;
    if !status.is_success() {
        return Err(ApiError::from_response(status.as_u16(), &bytes).into());
    }
    serde_json::from_slice(&bytes).map_err(Error::Decode)
}

async fn expect_success(response: Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let bytes = response.bytes().await?;
    Err(ApiError::from_response(status.as_u16(), &bytes).into())
}
