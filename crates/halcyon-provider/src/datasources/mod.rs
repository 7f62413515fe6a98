//! Read-only lookup handlers (data sources).
//!
//! Each goes straight from a lookup selector to a fetched entity; none of
//! them takes desired state.

pub mod connection;
pub mod directory;
pub mod directory_group;
pub mod directory_user;
pub mod organization;
pub mod role;
pub mod user;

pub use connection::{ConnectionDataSource, ConnectionQuery};
pub use directory::{DirectoryDataSource, DirectoryQuery};
pub use directory_group::{DirectoryGroupDataSource, DirectoryGroupQuery};
pub use directory_user::{DirectoryUserDataSource, DirectoryUserQuery};
pub use organization::{OrganizationDataSource, OrganizationQuery};
pub use role::{RoleDataSource, RoleQuery};
pub use user::{UserDataSource, UserQuery};
