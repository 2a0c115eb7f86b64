//! Feature-to-roles registry
//!
//! Maps the dashboard's gated surfaces to the roles allowed to use them.
//! The registry is a static string-keyed table: new features can be added
//! without touching the `Role` type, and unknown keys resolve to the
//! empty set.

use crate::roles::Role;

/// Roles permitted to use a feature.
///
/// Returns the empty slice for keys not present in the registry: an
/// unregistered feature is accessible to nobody through this path. The
/// lookup never fails and never fabricates a default role set.
///
/// # Examples
///
/// ```
/// use fieldops_access::{roles_for_feature, Role};
///
/// assert_eq!(roles_for_feature("system-settings"), &[Role::Admin]);
/// assert!(roles_for_feature("unknown-feature-xyz").is_empty());
/// ```
pub fn roles_for_feature(feature: &str) -> &'static [Role] {
    match feature {
        "dashboard" | "notifications" => &[
            Role::Vendor,
            Role::Client,
            Role::Executive,
            Role::Manager,
            Role::Admin,
        ],
        "campaign-creation" => &[Role::Manager, Role::Admin],
        "campaign-approval" => &[Role::Executive, Role::Manager, Role::Admin],
        "task-assignment" => &[Role::Manager, Role::Admin],
        "lead-management" => &[Role::Client, Role::Executive, Role::Manager, Role::Admin],
        "expense-submission" => &[Role::Vendor, Role::Executive, Role::Manager, Role::Admin],
        "expense-approval" => &[Role::Manager, Role::Admin],
        "vendor-management" => &[Role::Manager, Role::Admin],
        "execution-reports" => &[Role::Vendor, Role::Manager, Role::Admin],
        "activity-feed" => &[Role::Executive, Role::Manager, Role::Admin],
        "user-management" => &[Role::Admin],
        "system-settings" => &[Role::Admin],
        _ => &[],
    }
}

/// All feature keys present in the registry.
///
/// # Returns
///
/// A vector of every registered feature key
pub fn known_features() -> Vec<&'static str> {
    vec![
        "dashboard",
        "notifications",
        "campaign-creation",
        "campaign-approval",
        "task-assignment",
        "lead-management",
        "expense-submission",
        "expense-approval",
        "vendor-management",
        "execution-reports",
        "activity-feed",
        "user-management",
        "system-settings",
    ]
}

/// Decide feature access for a role through the registry.
///
/// Unlike [`has_access`](crate::has_access), an empty role set here means
/// "nobody": an unknown feature key denies everyone, including admins. An
/// absent role is denied as always.
///
/// # Examples
///
/// ```
/// use fieldops_access::{can_access_feature, Role};
///
/// assert!(can_access_feature(Some(Role::Admin), "user-management"));
/// assert!(!can_access_feature(Some(Role::Executive), "user-management"));
/// assert!(!can_access_feature(Some(Role::Admin), "unknown-feature-xyz"));
/// assert!(!can_access_feature(None, "dashboard"));
/// ```
pub fn can_access_feature(user_role: Option<Role>, feature: &str) -> bool {
    match user_role {
        Some(role) => roles_for_feature(feature).contains(&role),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_only_features() {
        assert_eq!(roles_for_feature("system-settings"), &[Role::Admin]);
        assert_eq!(roles_for_feature("user-management"), &[Role::Admin]);
    }

    #[test]
    fn test_unknown_feature_is_empty() {
        assert!(roles_for_feature("unknown-feature-xyz").is_empty());
        assert!(roles_for_feature("").is_empty());
    }

    #[test]
    fn test_registry_roles_are_valid() {
        for feature in known_features() {
            let roles = roles_for_feature(feature);
            assert!(!roles.is_empty(), "registered feature {feature} has no roles");
            for role in roles {
                assert!(Role::all().contains(role));
            }
        }
    }

    #[test]
    fn test_feature_access() {
        assert!(can_access_feature(Some(Role::Manager), "campaign-creation"));
        assert!(!can_access_feature(Some(Role::Executive), "campaign-creation"));

        assert!(can_access_feature(Some(Role::Vendor), "execution-reports"));
        assert!(!can_access_feature(Some(Role::Client), "execution-reports"));

        assert!(can_access_feature(Some(Role::Vendor), "dashboard"));
        assert!(can_access_feature(Some(Role::Client), "notifications"));
    }

    #[test]
    fn test_unknown_feature_denies_everyone() {
        for role in Role::all() {
            assert!(!can_access_feature(Some(role), "unknown-feature-xyz"));
        }
    }

    #[test]
    fn test_absent_role_is_denied() {
        assert!(!can_access_feature(None, "dashboard"));
        assert!(!can_access_feature(None, "unknown-feature-xyz"));
    }
}
