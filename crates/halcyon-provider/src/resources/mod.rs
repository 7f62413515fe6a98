//! Reconciliation handlers for the managed resource kinds.

pub mod membership;
pub mod organization;
pub mod role;
pub mod user;
pub mod webhook;

pub use membership::{MembershipConfig, MembershipResource, MembershipState};
pub use organization::{OrganizationConfig, OrganizationResource, OrganizationState};
pub use role::{RoleConfig, RoleResource, RoleState, ROLE_SLUG_PREFIX};
pub use user::{UserConfig, UserResource, UserState};
pub use webhook::{WebhookConfig, WebhookResource, WebhookState, KNOWN_WEBHOOK_EVENTS};
