//! User profile domain model
//!
//! This module provides the profile value type the dashboard observes for
//! each user. The profile row itself lives in the external platform;
//! locally it is a plain value whose `role` field feeds access checks.

use chrono::{DateTime, Utc};
use fieldops_access::Role;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's profile as seen by the dashboard.
///
/// The role is assigned by an administrator and may be absent: a freshly
/// provisioned profile has no role yet, and a role-less or deactivated
/// profile is denied everywhere (fail closed).
///
/// # Examples
///
/// ```
/// use fieldops_access::Role;
/// use fieldops_profile::UserProfile;
///
/// let profile = UserProfile::new("Priya Sharma", "priya@example.com");
/// assert!(profile.role().is_none());
/// assert!(profile.is_active);
///
/// let manager = UserProfile::new("Arjun Mehta", "arjun@example.com")
///     .with_role(Role::Manager);
/// assert_eq!(manager.role(), Some(Role::Manager));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique profile ID
    pub id: Uuid,

    /// Full name shown in the UI
    pub full_name: String,

    /// Contact email
    pub email: String,

    /// Assigned role, if any
    pub role: Option<Role>,

    /// Whether the profile is active
    pub is_active: bool,

    /// When the profile was created
    pub created_at: DateTime<Utc>,

    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Creates a new active profile with no role assigned.
    ///
    /// The profile is created with:
    /// - A newly generated UUID v7 ID
    /// - Active status
    /// - Current timestamps
    /// - No role (denied everywhere until one is assigned)
    ///
    /// # Arguments
    ///
    /// * `full_name` - Full name shown in the UI
    /// * `email` - Contact email
    pub fn new(full_name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            full_name: full_name.into(),
            email: email.into(),
            role: None,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the role on a freshly built profile.
    ///
    /// # Arguments
    ///
    /// * `role` - The role to assign
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// The role access checks should see for this profile.
    ///
    /// A deactivated profile reports no role regardless of what is stored,
    /// so every access check fails closed for it.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldops_access::Role;
    /// use fieldops_profile::UserProfile;
    ///
    /// let mut profile = UserProfile::new("Dana", "dana@example.com").with_role(Role::Admin);
    /// assert_eq!(profile.role(), Some(Role::Admin));
    ///
    /// profile.deactivate();
    /// assert_eq!(profile.role(), None);
    /// ```
    pub fn role(&self) -> Option<Role> {
        if self.is_active {
            self.role
        } else {
            None
        }
    }

    /// Assign a role to this profile.
    ///
    /// # Arguments
    ///
    /// * `role` - The role to assign
    pub fn assign_role(&mut self, role: Role) {
        self.role = Some(role);
        self.updated_at = Utc::now();
    }

    /// Remove the assigned role.
    ///
    /// The profile remains active but is denied everywhere until a role is
    /// assigned again.
    pub fn clear_role(&mut self) {
        self.role = None;
        self.updated_at = Utc::now();
    }

    /// Deactivate this profile.
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    /// Reactivate this profile.
    pub fn reactivate(&mut self) {
        self.is_active = true;
        self.updated_at = Utc::now();
    }
}
