//! Directory-sync operations.
//!
//! Directories and their synced users/groups are read-only projections:
//! directory provisioning happens in the Halcyon management console, and
//! user/group records are owned by the upstream identity provider. See
//! [`crate::capability::Directories`].

use crate::error::{ApiError, Result};
use crate::http::{encode_query, ApiClient};
use crate::models::{Directory, DirectoryGroup, DirectoryUser, Page};

impl ApiClient {
    /// Retrieve a directory by id.
    pub async fn get_directory(&self, id: &str) -> Result<Directory> {
        self.get(&format!("/directories/{id}")).await
    }

    /// List directories, optionally scoped to an organization.
    pub async fn list_directories(
        &self,
        organization_id: Option<&str>,
    ) -> Result<Page<Directory>> {
        let mut path = "/directories".to_string();
        if let Some(org) = organization_id {
            path = format!("{path}?{}", encode_query(&[("organization_id", org)]));
        }
        self.get(&path).await
    }

    /// Find the directory attached to an organization. The first match
    /// wins; zero matches surfaces as a not-found error.
    pub async fn find_directory_by_organization(
        &self,
        organization_id: &str,
    ) -> Result<Directory> {
        let page = self.list_directories(Some(organization_id)).await?;
        page.data.into_iter().next().ok_or_else(|| {
            ApiError::not_found(format!(
                "no directory found for organization {organization_id}"
            ))
            .into()
        })
    }

    /// Retrieve a directory user by id.
    pub async fn get_directory_user(&self, id: &str) -> Result<DirectoryUser> {
        self.get(&format!("/directory_users/{id}")).await
    }

    /// List users synced into a directory.
    pub async fn list_directory_users(&self, directory_id: &str) -> Result<Page<DirectoryUser>> {
        let query = encode_query(&[("directory", directory_id)]);
        self.get(&format!("/directory_users?{query}")).await
    }

    /// Find a directory user by email.
    pub async fn find_directory_user_by_email(
        &self,
        directory_id: &str,
        email: &str,
    ) -> Result<DirectoryUser> {
        let query = encode_query(&[("directory", directory_id), ("emails", email)]);
        let page: Page<DirectoryUser> = self.get(&format!("/directory_users?{query}")).await?;

        page.data.into_iter().next().ok_or_else(|| {
            ApiError::not_found(format!(
                "no user found with email {email} in directory {directory_id}"
            ))
            .into()
        })
    }

    /// Retrieve a directory group by id.
    pub async fn get_directory_group(&self, id: &str) -> Result<DirectoryGroup> {
        self.get(&format!("/directory_groups/{id}")).await
    }

    /// List groups synced into a directory.
    pub async fn list_directory_groups(&self, directory_id: &str) -> Result<Page<DirectoryGroup>> {
        let query = encode_query(&[("directory", directory_id)]);
        self.get(&format!("/directory_groups?{query}")).await
    }

    /// Find a directory group by display name. The API offers no name
    /// filter, so the directory's groups are listed and scanned.
    pub async fn find_directory_group_by_name(
        &self,
        directory_id: &str,
        name: &str,
    ) -> Result<DirectoryGroup> {
        let page = self.list_directory_groups(directory_id).await?;
        page.data
            .into_iter()
            .find(|group| group.name == name)
            .ok_or_else(|| {
                ApiError::not_found(format!(
                    "no group found with name {name} in directory {directory_id}"
                ))
                .into()
            })
    }
}
