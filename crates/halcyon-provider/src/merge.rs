//! Three-state merge for lossy API responses.
//!
//! Several Halcyon attributes are accepted on write but not reliably echoed
//! back: membership `role_slug` is sometimes omitted even when applied, and
//! write-only secrets (passwords, hashes) are never returned at all. A
//! two-state nullable cannot express this — an absent server value would
//! wrongly erase the stored one. The rule, shared by every handler:
//!
//! 1. a non-empty server value always wins;
//! 2. otherwise a non-empty locally held value survives unchanged;
//! 3. otherwise the attribute is explicitly absent.

/// Applies the three-state merge rule.
#[must_use]
pub fn merge_preserving(server: Option<&str>, prior: Option<&str>) -> Option<String> {
    match server {
        Some(value) if !value.is_empty() => Some(value.to_string()),
        _ => match prior {
            Some(value) if !value.is_empty() => Some(value.to_string()),
            _ => None,
        },
    }
}

/// Collapses an empty string into the explicit absent marker.
#[must_use]
pub fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
