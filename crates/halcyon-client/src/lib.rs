//! Typed HTTP client for the Halcyon identity management API.
//!
//! The transport layer ([`ApiClient`]) issues bearer-authenticated JSON
//! requests with automatic rate-limit retry; non-2xx responses normalize
//! into the [`error`] taxonomy. One module per resource family layers typed
//! operations over the shared verbs, with each family's write capability
//! tagged in [`capability`].

pub mod capability;
pub mod error;
pub mod http;
pub mod models;

mod connections;
mod directories;
mod organizations;
mod roles;
mod users;

pub use error::{ApiError, Error, ErrorKind, FieldError, Result};
pub use http::{ApiClient, DEFAULT_BASE_URL};
