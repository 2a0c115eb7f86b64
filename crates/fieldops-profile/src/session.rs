//! Session state for the signed-in user
//!
//! This module tracks what the dashboard currently knows about the caller:
//! whether anyone is signed in, and whether their profile has finished
//! loading. Access checks read the current role from here, so the
//! "profile not yet loaded" window naturally evaluates as denial.

use chrono::{DateTime, Utc};
use fieldops_access::{can_access_feature, Role};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::profile::UserProfile;

/// The dashboard's view of the current caller.
///
/// A session moves through three observable states: anonymous (no user),
/// authenticated with the profile still loading, and fully loaded. Only
/// the last state can yield a role; the first two fail closed.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use fieldops_access::Role;
/// use fieldops_profile::{Session, UserProfile};
///
/// let mut session = Session::for_user(Uuid::now_v7());
/// assert!(session.is_authenticated());
/// assert!(session.current_role().is_none()); // profile not loaded yet
///
/// let profile = UserProfile::new("Arjun Mehta", "arjun@example.com")
///     .with_role(Role::Manager);
/// session.set_profile(profile);
/// assert_eq!(session.current_role(), Some(Role::Manager));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Authenticated user, if any
    pub user_id: Option<Uuid>,

    /// Loaded profile for the authenticated user
    pub profile: Option<UserProfile>,

    /// Last updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Creates an anonymous session.
    pub fn anonymous() -> Self {
        Self {
            user_id: None,
            profile: None,
            updated_at: Utc::now(),
        }
    }

    /// Creates an authenticated session whose profile has not loaded yet.
    ///
    /// # Arguments
    ///
    /// * `user_id` - The authenticated user ID
    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            user_id: Some(user_id),
            profile: None,
            updated_at: Utc::now(),
        }
    }

    /// Attach the loaded profile.
    ///
    /// Also adopts the profile's ID as the session user when none was set.
    ///
    /// # Arguments
    ///
    /// * `profile` - The loaded profile
    pub fn set_profile(&mut self, profile: UserProfile) {
        if self.user_id.is_none() {
            self.user_id = Some(profile.id);
        }
        self.profile = Some(profile);
        self.updated_at = Utc::now();
    }

    /// Reset to the anonymous state.
    ///
    /// Used on sign-out; every subsequent access check is denied.
    pub fn clear(&mut self) {
        self.user_id = None;
        self.profile = None;
        self.updated_at = Utc::now();
    }

    /// Whether a user is signed in (their profile may still be loading).
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    /// The role access checks should see for this session.
    ///
    /// `None` when anonymous, while the profile is loading, when the
    /// profile is deactivated, or when no role has been assigned.
    pub fn current_role(&self) -> Option<Role> {
        self.profile.as_ref().and_then(UserProfile::role)
    }

    /// Whether the current caller may use a feature.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldops_access::Role;
    /// use fieldops_profile::{Session, UserProfile};
    ///
    /// let mut session = Session::anonymous();
    /// assert!(!session.can_use("dashboard"));
    ///
    /// session.set_profile(UserProfile::new("Dana", "dana@example.com").with_role(Role::Admin));
    /// assert!(session.can_use("system-settings"));
    /// ```
    pub fn can_use(&self, feature: &str) -> bool {
        can_access_feature(self.current_role(), feature)
    }

    /// Whether the current caller is exactly an administrator.
    pub fn is_admin(&self) -> bool {
        self.current_role().map(|role| role.is_admin()).unwrap_or(false)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::anonymous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_session_has_no_role() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert!(session.current_role().is_none());
        assert!(!session.is_admin());
    }

    #[test]
    fn test_loading_profile_window_fails_closed() {
        let session = Session::for_user(Uuid::now_v7());
        assert!(session.is_authenticated());
        assert!(session.current_role().is_none());
        assert!(!session.can_use("dashboard"));
    }

    #[test]
    fn test_loaded_profile_supplies_role() {
        let mut session = Session::for_user(Uuid::now_v7());
        let profile = UserProfile::new("Test User", "test@example.com").with_role(Role::Executive);
        session.set_profile(profile);

        assert_eq!(session.current_role(), Some(Role::Executive));
        assert!(session.can_use("activity-feed"));
        assert!(!session.can_use("user-management"));
        assert!(!session.is_admin());
    }

    #[test]
    fn test_set_profile_adopts_user_id() {
        let mut session = Session::anonymous();
        let profile = UserProfile::new("Test User", "test@example.com");
        let profile_id = profile.id;

        session.set_profile(profile);
        assert_eq!(session.user_id, Some(profile_id));
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_deactivated_profile_fails_closed() {
        let mut session = Session::anonymous();
        let mut profile = UserProfile::new("Test User", "test@example.com").with_role(Role::Admin);
        profile.deactivate();
        session.set_profile(profile);

        assert!(session.current_role().is_none());
        assert!(!session.is_admin());
        assert!(!session.can_use("dashboard"));
    }

    #[test]
    fn test_clear_resets_to_anonymous() {
        let mut session = Session::for_user(Uuid::now_v7());
        session.set_profile(UserProfile::new("Test User", "test@example.com").with_role(Role::Admin));
        assert!(session.is_admin());

        session.clear();
        assert!(!session.is_authenticated());
        assert!(session.current_role().is_none());
        assert!(!session.can_use("system-settings"));
    }
}
