//! User and organization-membership operations.

use crate::error::{ApiError, Result};
use crate::http::{encode_query, ApiClient};
use crate::models::{
    CreateOrganizationMembership, CreateUser, OrganizationMembership, Page, UpdateUser, User,
};

impl ApiClient {
    /// Create a new user.
    pub async fn create_user(&self, req: &CreateUser) -> Result<User> {
        self.post("/user_management/users", req).await
    }

    /// Retrieve a user by id.
    pub async fn get_user(&self, id: &str) -> Result<User> {
        self.get(&format!("/user_management/users/{id}")).await
    }

    /// Update an existing user.
    pub async fn update_user(&self, id: &str, req: &UpdateUser) -> Result<User> {
        self.put(&format!("/user_management/users/{id}"), req).await
    }

    /// Delete a user by id, revoking the remote account.
    pub async fn delete_user(&self, id: &str) -> Result<()> {
        self.delete(&format!("/user_management/users/{id}")).await
    }

    /// List users, optionally filtered by email and/or organization.
    pub async fn list_users(
        &self,
        email: Option<&str>,
        organization_id: Option<&str>,
    ) -> Result<Page<User>> {
        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(email) = email {
            params.push(("email", email));
        }
        if let Some(org) = organization_id {
            params.push(("organization_id", org));
        }

        let mut path = "/user_management/users".to_string();
        if !params.is_empty() {
            path = format!("{path}?{}", encode_query(&params));
        }
        self.get(&path).await
    }

    /// Find a user by email. Zero matches surfaces as a not-found error.
    pub async fn find_user_by_email(&self, email: &str) -> Result<User> {
        let page = self.list_users(Some(email), None).await?;
        page.data
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::not_found(format!("no user found with email: {email}")).into())
    }

    /// Create an organization membership.
    pub async fn create_organization_membership(
        &self,
        req: &CreateOrganizationMembership,
    ) -> Result<OrganizationMembership> {
        self.post("/user_management/organization_memberships", req)
            .await
    }

    /// Retrieve an organization membership by id.
    pub async fn get_organization_membership(&self, id: &str) -> Result<OrganizationMembership> {
        self.get(&format!("/user_management/organization_memberships/{id}"))
            .await
    }

    /// Delete an organization membership by id.
    pub async fn delete_organization_membership(&self, id: &str) -> Result<()> {
        self.delete(&format!("/user_management/organization_memberships/{id}"))
            .await
    }

    /// List organization memberships, optionally filtered by user and/or
    /// organization.
    pub async fn list_organization_memberships(
        &self,
        user_id: Option<&str>,
        organization_id: Option<&str>,
    ) -> Result<Page<OrganizationMembership>> {
        let mut params: Vec<(&str, &str)> = Vec::new();
        if let Some(user) = user_id {
            params.push(("user_id", user));
        }
        if let Some(org) = organization_id {
            params.push(("organization_id", org));
        }

        let mut path = "/user_management/organization_memberships".to_string();
        if !params.is_empty() {
            path = format!("{path}?{}", encode_query(&params));
        }
        self.get(&path).await
    }
}
