//! Role hierarchy for dashboard access control
//!
//! This module defines the user roles recognized by the dashboard and the
//! total order used for hierarchy-based access checks.

use std::fmt;

use serde::{Deserialize, Serialize};

/// User role within the dashboard.
///
/// Roles are hierarchical, with each role inheriting the access of lower roles.
/// The hierarchy is: Vendor < Client < Executive < Manager < Admin
///
/// # Access Model
///
/// - **Vendor**: External execution partner; sees assigned work, submits execution reports
/// - **Client**: Brand-side stakeholder with read-mostly campaign visibility
/// - **Executive**: Field executive working tasks and leads on the ground
/// - **Manager**: Campaign manager; creates campaigns, assigns work, approves expenses
/// - **Admin**: Full control including user management and system settings
///
/// # Examples
///
/// ```
/// use fieldops_access::Role;
///
/// let role = Role::Manager;
/// assert!(role.is_manager_or_above());
/// assert!(!role.is_admin());
///
/// let admin = Role::Admin;
/// assert!(admin.is_admin());
/// assert!(admin.is_executive_or_above());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// External execution partner (limited visibility)
    Vendor = 0,

    /// Brand-side stakeholder
    Client = 1,

    /// Field executive
    Executive = 2,

    /// Campaign manager
    Manager = 3,

    /// Full system control
    Admin = 4,
}

impl Role {
    /// Get the rank of this role in the hierarchy.
    ///
    /// Ranks are strictly increasing from Vendor (0) to Admin (4) and are
    /// fixed for the lifetime of the process.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldops_access::Role;
    ///
    /// assert_eq!(Role::Vendor.rank(), 0);
    /// assert_eq!(Role::Admin.rank(), 4);
    /// assert!(Role::Manager.rank() > Role::Executive.rank());
    /// ```
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    /// Check if this role is exactly the admin role.
    ///
    /// This is an equality check, not a hierarchy comparison; call sites
    /// that gate admin-only surfaces treat "is exactly admin" and "is at
    /// least manager" as distinct questions.
    ///
    /// # Returns
    ///
    /// `true` only for the Admin role
    pub fn is_admin(&self) -> bool {
        *self == Role::Admin
    }

    /// Check if this role has at least manager privileges.
    ///
    /// # Returns
    ///
    /// `true` for Manager and Admin roles
    pub fn is_manager_or_above(&self) -> bool {
        *self >= Role::Manager
    }

    /// Check if this role has at least field-executive privileges.
    ///
    /// # Returns
    ///
    /// `true` for Executive, Manager, and Admin roles
    pub fn is_executive_or_above(&self) -> bool {
        *self >= Role::Executive
    }

    /// Parse role from string representation.
    ///
    /// # Arguments
    ///
    /// * `s` - String to parse (case-insensitive)
    ///
    /// # Returns
    ///
    /// `Some(Role)` if valid, `None` otherwise
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldops_access::Role;
    ///
    /// assert_eq!(Role::parse("manager"), Some(Role::Manager));
    /// assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
    /// assert_eq!(Role::parse("invalid"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "vendor" => Some(Self::Vendor),
            "client" => Some(Self::Client),
            "executive" => Some(Self::Executive),
            "manager" => Some(Self::Manager),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }

    /// Get string representation of the role.
    ///
    /// # Returns
    ///
    /// Lowercase string representation
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldops_access::Role;
    ///
    /// assert_eq!(Role::Manager.as_str(), "manager");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vendor => "vendor",
            Self::Client => "client",
            Self::Executive => "executive",
            Self::Manager => "manager",
            Self::Admin => "admin",
        }
    }

    /// Get a human-readable display name for the role.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldops_access::Role;
    ///
    /// assert_eq!(Role::Vendor.display_name(), "Vendor");
    /// assert_eq!(Role::Admin.display_name(), "Administrator");
    /// ```
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Vendor => "Vendor",
            Self::Client => "Client",
            Self::Executive => "Executive",
            Self::Manager => "Manager",
            Self::Admin => "Administrator",
        }
    }

    /// Get all roles, ordered lowest rank first.
    ///
    /// # Returns
    ///
    /// A vector containing every role in the hierarchy
    pub fn all() -> Vec<Self> {
        vec![
            Role::Vendor,
            Role::Client,
            Role::Executive,
            Role::Manager,
            Role::Admin,
        ]
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Look up the display name for a raw role identifier.
///
/// Unknown identifiers are returned unchanged rather than treated as an
/// error; the caller is usually rendering whatever the profile record
/// happened to contain.
///
/// # Examples
///
/// ```
/// use fieldops_access::display_label;
///
/// assert_eq!(display_label("admin"), "Administrator");
/// assert_eq!(display_label("vendor"), "Vendor");
/// assert_eq!(display_label("superuser"), "superuser");
/// ```
pub fn display_label(raw: &str) -> &str {
    match Role::parse(raw) {
        Some(role) => role.display_name(),
        None => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_hierarchy() {
        assert!(Role::Admin > Role::Manager);
        assert!(Role::Manager > Role::Executive);
        assert!(Role::Executive > Role::Client);
        assert!(Role::Client > Role::Vendor);
    }

    #[test]
    fn test_role_ranks() {
        assert_eq!(Role::Vendor.rank(), 0);
        assert_eq!(Role::Client.rank(), 1);
        assert_eq!(Role::Executive.rank(), 2);
        assert_eq!(Role::Manager.rank(), 3);
        assert_eq!(Role::Admin.rank(), 4);
    }

    #[test]
    fn test_role_predicates() {
        assert!(Role::Admin.is_admin());
        assert!(!Role::Manager.is_admin());

        assert!(Role::Admin.is_manager_or_above());
        assert!(Role::Manager.is_manager_or_above());
        assert!(!Role::Executive.is_manager_or_above());

        assert!(Role::Executive.is_executive_or_above());
        assert!(!Role::Client.is_executive_or_above());
        assert!(!Role::Vendor.is_executive_or_above());
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(Role::parse("vendor"), Some(Role::Vendor));
        assert_eq!(Role::parse("MANAGER"), Some(Role::Manager));
        assert_eq!(Role::parse("Admin"), Some(Role::Admin));
        assert_eq!(Role::parse("invalid"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn test_role_round_trip() {
        for role in Role::all() {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Role::Vendor.display_name(), "Vendor");
        assert_eq!(Role::Client.display_name(), "Client");
        assert_eq!(Role::Executive.display_name(), "Executive");
        assert_eq!(Role::Manager.display_name(), "Manager");
        assert_eq!(Role::Admin.display_name(), "Administrator");
    }

    #[test]
    fn test_display_label_fallback() {
        assert_eq!(display_label("admin"), "Administrator");
        assert_eq!(display_label("executive"), "Executive");
        assert_eq!(display_label("superuser"), "superuser");
        assert_eq!(display_label(""), "");
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Role::Executive).unwrap();
        assert_eq!(json, "\"executive\"");

        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }
}
