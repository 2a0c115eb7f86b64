//! Error types for access checks
//!
//! The decision functions themselves never fail; an indeterminate role is
//! an automatic denial, not a fault. These types exist for callers (route
//! guards, action handlers) that want a denial surfaced as a typed error
//! instead of a bare `false`.

use thiserror::Error;

use crate::access::has_access;
use crate::features::can_access_feature;
use crate::roles::Role;

/// Access check error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// No role is available for the caller (not signed in, or the profile
    /// has not loaded yet)
    #[error("Access denied: no role available")]
    NoRole,

    /// The caller's role does not satisfy the check
    #[error("Access denied for role '{0}'")]
    Forbidden(Role),
}

/// Result type for access checks.
pub type AccessResult<T> = Result<T, AccessError>;

/// Evaluate [`has_access`] and surface a denial as an error.
///
/// `Ok(())` exactly when `has_access` returns `true`; the error carries
/// whether the denial came from an absent role or a present-but-rejected
/// one.
///
/// # Examples
///
/// ```
/// use fieldops_access::{require_access, AccessError, Role};
///
/// assert!(require_access(Some(Role::Admin), Some(Role::Manager), None).is_ok());
/// assert_eq!(
///     require_access(None, Some(Role::Manager), None),
///     Err(AccessError::NoRole)
/// );
/// assert_eq!(
///     require_access(Some(Role::Client), Some(Role::Manager), None),
///     Err(AccessError::Forbidden(Role::Client))
/// );
/// ```
pub fn require_access(
    user_role: Option<Role>,
    required_role: Option<Role>,
    allowed_roles: Option<&[Role]>,
) -> AccessResult<()> {
    if has_access(user_role, required_role, allowed_roles) {
        return Ok(());
    }
    match user_role {
        Some(role) => Err(AccessError::Forbidden(role)),
        None => Err(AccessError::NoRole),
    }
}

/// Evaluate [`can_access_feature`] and surface a denial as an error.
pub fn require_feature(user_role: Option<Role>, feature: &str) -> AccessResult<()> {
    if can_access_feature(user_role, feature) {
        return Ok(());
    }
    match user_role {
        Some(role) => Err(AccessError::Forbidden(role)),
        None => Err(AccessError::NoRole),
    }
}
