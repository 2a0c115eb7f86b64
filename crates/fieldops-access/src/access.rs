//! Access decision rules
//!
//! Combines a user's role with a permission specification (a minimum
//! required role and/or an explicit allow-list) to produce a boolean
//! access decision.

use crate::roles::Role;

/// Decide whether a role satisfies a permission specification.
///
/// The rules are applied in order; the first that matches decides:
///
/// 1. An absent `user_role` is always denied (fail closed).
/// 2. A non-empty `allowed_roles` list is an exact membership test and
///    **ignores the hierarchy**: a higher-ranked role that is not in the
///    list is denied. An allow-list expresses exact membership, not a
///    minimum bar, and takes precedence over `required_role`.
/// 3. An absent `required_role` grants access to any present role.
/// 4. Otherwise the user's role must rank at least as high as
///    `required_role`.
///
/// The decision is a pure function of its arguments and the static role
/// table; it has no side effects and no failure path.
///
/// # Examples
///
/// ```
/// use fieldops_access::{has_access, Role};
///
/// // Hierarchy: admin satisfies a manager requirement
/// assert!(has_access(Some(Role::Admin), Some(Role::Manager), None));
///
/// // Allow-list overrides hierarchy: admin is not in the list
/// assert!(!has_access(Some(Role::Admin), Some(Role::Manager), Some(&[Role::Vendor])));
///
/// // No role loaded yet: denied
/// assert!(!has_access(None, None, None));
/// ```
pub fn has_access(
    user_role: Option<Role>,
    required_role: Option<Role>,
    allowed_roles: Option<&[Role]>,
) -> bool {
    let user = match user_role {
        Some(role) => role,
        None => return false,
    };

    // Only a non-empty allow-list restricts; an empty one falls through to
    // the hierarchy rule.
    if let Some(allowed) = allowed_roles {
        if !allowed.is_empty() {
            return allowed.contains(&user);
        }
    }

    match required_role {
        Some(required) => user >= required,
        None => true,
    }
}

/// A single access check: the caller's role plus the permission
/// specification to evaluate it against.
///
/// Requests are cheap borrowed values built per check and discarded; they
/// carry no identity beyond the role itself.
///
/// # Examples
///
/// ```
/// use fieldops_access::{AccessRequest, Role};
///
/// let request = AccessRequest::for_role(Some(Role::Executive)).require(Role::Manager);
/// assert!(!request.granted());
///
/// let request = AccessRequest::for_role(Some(Role::Vendor)).allow_any(&[Role::Vendor]);
/// assert!(request.granted());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessRequest<'a> {
    /// The caller's current role, if one has been loaded.
    pub user_role: Option<Role>,

    /// Minimum role for hierarchy-based access.
    pub required_role: Option<Role>,

    /// Exact allow-list; when non-empty it takes precedence over
    /// `required_role`.
    pub allowed_roles: Option<&'a [Role]>,
}

impl<'a> AccessRequest<'a> {
    /// Create an unrestricted request for the given caller role.
    ///
    /// Without further constraints the request grants access to any
    /// present role and denies an absent one.
    pub fn for_role(user_role: Option<Role>) -> Self {
        Self {
            user_role,
            required_role: None,
            allowed_roles: None,
        }
    }

    /// Restrict the request to roles ranking at least as high as `role`.
    pub fn require(mut self, role: Role) -> Self {
        self.required_role = Some(role);
        self
    }

    /// Restrict the request to exactly the given roles.
    ///
    /// A non-empty list overrides any required role set on the request.
    pub fn allow_any(mut self, roles: &'a [Role]) -> Self {
        self.allowed_roles = Some(roles);
        self
    }

    /// Evaluate the request.
    pub fn granted(&self) -> bool {
        has_access(self.user_role, self.required_role, self.allowed_roles)
    }
}
