//! Organization-role operations.
//!
//! Role endpoints are slug-addressed under the parent organization: the
//! opaque id appears in responses but never in a path.

use crate::error::{ApiError, Result};
use crate::http::ApiClient;
use crate::models::{CreateOrganizationRole, OrganizationRole, Page, UpdateOrganizationRole};

impl ApiClient {
    /// Create a role scoped to an organization.
    pub async fn create_organization_role(
        &self,
        organization_id: &str,
        req: &CreateOrganizationRole,
    ) -> Result<OrganizationRole> {
        self.post(
            &format!("/authorization/organizations/{organization_id}/roles"),
            req,
        )
        .await
    }

    /// Retrieve a role by its organization and slug.
    pub async fn get_organization_role(
        &self,
        organization_id: &str,
        slug: &str,
    ) -> Result<OrganizationRole> {
        self.get(&format!(
            "/authorization/organizations/{organization_id}/roles/{slug}"
        ))
        .await
    }

    /// Update a role's name and description.
    pub async fn update_organization_role(
        &self,
        organization_id: &str,
        slug: &str,
        req: &UpdateOrganizationRole,
    ) -> Result<OrganizationRole> {
        self.patch(
            &format!("/authorization/organizations/{organization_id}/roles/{slug}"),
            req,
        )
        .await
    }

    /// Delete a role by its organization and slug.
    pub async fn delete_organization_role(&self, organization_id: &str, slug: &str) -> Result<()> {
        self.delete(&format!(
            "/authorization/organizations/{organization_id}/roles/{slug}"
        ))
        .await
    }

    /// List all roles of an organization.
    pub async fn list_organization_roles(
        &self,
        organization_id: &str,
    ) -> Result<Page<OrganizationRole>> {
        self.get(&format!(
            "/authorization/organizations/{organization_id}/roles"
        ))
        .await
    }

    /// Find a role by its opaque id. The API has no id-addressed endpoint,
    /// so this lists the organization's roles and scans.
    pub async fn find_organization_role_by_id(
        &self,
        organization_id: &str,
        role_id: &str,
    ) -> Result<OrganizationRole> {
        let page = self.list_organization_roles(organization_id).await?;
        page.data
            .into_iter()
            .find(|role| role.id == role_id)
            .ok_or_else(|| {
                ApiError::not_found(format!("no organization role found with id: {role_id}")).into()
            })
    }
}
