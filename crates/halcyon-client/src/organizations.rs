//! Organization operations.

use crate::error::{ApiError, Result};
use crate::http::{encode_query, ApiClient};
use crate::models::{CreateOrganization, Organization, Page, UpdateOrganization};

impl ApiClient {
    /// Create a new organization.
    pub async fn create_organization(&self, req: &CreateOrganization) -> Result<Organization> {
        self.post("/organizations", req).await
    }

    /// Retrieve an organization by id.
    pub async fn get_organization(&self, id: &str) -> Result<Organization> {
        self.get(&format!("/organizations/{id}")).await
    }

    /// Update an organization. The domain list is a full replacement.
    pub async fn update_organization(
        &self,
        id: &str,
        req: &UpdateOrganization,
    ) -> Result<Organization> {
        self.put(&format!("/organizations/{id}"), req).await
    }

    /// Delete an organization by id.
    pub async fn delete_organization(&self, id: &str) -> Result<()> {
        self.delete(&format!("/organizations/{id}")).await
    }

    /// List organizations.
    pub async fn list_organizations(&self) -> Result<Page<Organization>> {
        self.get("/organizations").await
    }

    /// Find an organization by verified domain. The first match wins; zero
    /// matches surfaces as a not-found error so callers classify it like a
    /// remote 404.
    pub async fn find_organization_by_domain(&self, domain: &str) -> Result<Organization> {
        let query = encode_query(&[("domains", domain)]);
        let page: Page<Organization> = self.get(&format!("/organizations?{query}")).await?;

        page.data.into_iter().next().ok_or_else(|| {
            ApiError::not_found(format!("no organization found with domain: {domain}")).into()
        })
    }
}
