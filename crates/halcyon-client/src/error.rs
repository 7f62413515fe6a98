//! Error types for the Halcyon API client.
//!
//! HTTP failures are normalized into [`ApiError`] carrying the status code,
//! the remote error code and message, and any field-level validation
//! failures. Callers classify errors through [`ErrorKind`] predicates rather
//! than by comparing status codes, so the status-to-kind mapping stays in
//! one place.

use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Semantic classification of an API error response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The requested resource does not exist (HTTP 404).
    NotFound,
    /// Authentication failed (HTTP 401).
    Unauthorized,
    /// The credential is valid but lacks access (HTTP 403).
    Forbidden,
    /// The request was malformed (HTTP 400).
    BadRequest,
    /// The resource already exists or conflicts with remote state (HTTP 409).
    Conflict,
    /// The client is being rate limited (HTTP 429).
    RateLimited,
    /// The remote service failed (HTTP 5xx).
    InternalServer,
    /// Any other 4xx the taxonomy does not name.
    Client,
}

/// Maps an HTTP status code to its semantic kind.
///
/// This is the only place in the crate where status codes are interpreted;
/// remapping a code to a different kind must happen here and nowhere else.
pub(crate) fn kind_for_status(status: u16) -> ErrorKind {
    match status {
        404 => ErrorKind::NotFound,
        401 => ErrorKind::Unauthorized,
        403 => ErrorKind::Forbidden,
        400 => ErrorKind::BadRequest,
        409 => ErrorKind::Conflict,
        429 => ErrorKind::RateLimited,
        s if s >= 500 => ErrorKind::InternalServer,
        _ => ErrorKind::Client,
    }
}

/// A field-level validation failure reported by the API.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    /// The offending attribute name.
    pub field: String,
    /// Machine-readable failure code.
    #[serde(default)]
    pub code: String,
    /// Human-readable detail, when provided.
    #[serde(default)]
    pub message: String,
}

/// A structured error response from the Halcyon API.
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status code of the response.
    pub status: u16,
    /// Machine-readable error code, when the API supplied one.
    pub code: Option<String>,
    /// Human-readable message. Always non-empty: a default is synthesized
    /// per status bucket when the response carried none.
    pub message: String,
    /// Field-level validation failures (400/422 responses).
    pub errors: Vec<FieldError>,
}

/// Wire shape of an error body. Parsed separately from [`ApiError`] because
/// the status code comes from the response line, not the body.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    code: String,
    #[serde(default)]
    errors: Vec<FieldError>,
}

impl ApiError {
    /// Builds an [`ApiError`] from a non-2xx response body.
    ///
    /// The body is decoded as the structured error shape when possible; a
    /// non-JSON body becomes the message verbatim, and an empty message is
    /// replaced with a per-status default.
    pub(crate) fn from_response(status: u16, body: &[u8]) -> Self {
        let parsed = if body.is_empty() {
            ErrorBody::default()
        } else {
            serde_json::from_slice::<ErrorBody>(body).unwrap_or_else(|_| ErrorBody {
                message: String::from_utf8_lossy(body).into_owned(),
                ..ErrorBody::default()
            })
        };

        let message = if parsed.message.is_empty() {
            default_message(status).to_string()
        } else {
            parsed.message
        };

        Self {
            status,
            code: (!parsed.code.is_empty()).then_some(parsed.code),
            message,
            errors: parsed.errors,
        }
    }

    /// Builds a synthesized not-found error for list lookups that matched
    /// nothing, so callers can treat them uniformly with remote 404s.
    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: 404,
            code: None,
            message: message.into(),
            errors: Vec::new(),
        }
    }

    /// The semantic kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        kind_for_status(self.status)
    }
}

fn default_message(status: u16) -> &'static str {
    match status {
        400 => "The request was invalid or malformed",
        401 => "Invalid API key or authentication failed",
        403 => "Access denied to this resource",
        404 => "The requested resource was not found",
        409 => "The resource already exists or conflicts with existing data",
        422 => "The request was well-formed but contained invalid data",
        429 => "Rate limit exceeded, please retry later",
        s if s >= 500 => "The Halcyon service encountered an internal error",
        _ => "Unexpected error",
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Halcyon API error (HTTP {})", self.status)?;
        if let Some(code) = &self.code {
            write!(f, " [{code}]")?;
        }
        write!(f, ": {}", self.message)?;
        if !self.errors.is_empty() {
            write!(f, "\nValidation errors:")?;
            for fe in &self.errors {
                write!(f, "\n  - {}", fe.field)?;
                if !fe.code.is_empty() {
                    write!(f, " [{}]", fe.code)?;
                }
                if !fe.message.is_empty() {
                    write!(f, ": {}", fe.message)?;
                }
            }
        }
        Ok(())
    }
}

impl std::error::Error for ApiError {}

/// Error returned by client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The API returned a non-2xx response.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request never produced a response (connect, timeout, TLS).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A 2xx response body could not be decoded into the expected shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The client was constructed with unusable configuration.
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The semantic kind, when this error carries an API response.
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Error::Api(e) => Some(e.kind()),
            _ => None,
        }
    }

    /// True when the remote resource does not exist. Read and delete paths
    /// treat this as "already absent", never as a failure.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind() == Some(ErrorKind::NotFound)
    }

    /// True when authentication failed.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.kind() == Some(ErrorKind::Unauthorized)
    }

    /// True when the credential lacks access to the resource.
    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        self.kind() == Some(ErrorKind::Forbidden)
    }

    /// True when the request was rejected as malformed.
    #[must_use]
    pub fn is_bad_request(&self) -> bool {
        self.kind() == Some(ErrorKind::BadRequest)
    }

    /// True when the write conflicted with existing remote state.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        self.kind() == Some(ErrorKind::Conflict)
    }

    /// True when the client exhausted its rate-limit retries.
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        self.kind() == Some(ErrorKind::RateLimited)
    }

    /// True when the remote service failed.
    #[must_use]
    pub fn is_internal_server(&self) -> bool {
        self.kind() == Some(ErrorKind::InternalServer)
    }
}
