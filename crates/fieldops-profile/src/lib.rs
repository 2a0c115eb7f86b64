//! # Fieldops Profile & Session State
//!
//! This crate provides the profile and session value types the Fieldops
//! dashboard reads its caller's role from. Persistence and authentication
//! live in the external platform; locally these are plain values.
//!
//! ## Overview
//!
//! The fieldops-profile crate handles:
//! - **Profiles**: Per-user records carrying an optional assigned role
//! - **Sessions**: The caller's current state (anonymous, loading, loaded)
//!
//! ## Architecture
//!
//! ```text
//! Session
//!   ├─ user_id (None until sign-in)
//!   └─ UserProfile (None until the profile row loads)
//!         └─ role: Option<Role> ─→ fieldops-access decisions
//! ```
//!
//! A session only yields a role once a profile has loaded, is active, and
//! carries an assignment; every earlier state evaluates to denial in
//! `fieldops-access` (fail closed).
//!
//! ## Usage
//!
//! ```rust
//! use fieldops_access::Role;
//! use fieldops_profile::{Session, UserProfile};
//!
//! let mut session = Session::anonymous();
//! assert!(!session.can_use("campaign-creation"));
//!
//! let profile = UserProfile::new("Arjun Mehta", "arjun@example.com")
//!     .with_role(Role::Manager);
//! session.set_profile(profile);
//! assert!(session.can_use("campaign-creation"));
//! ```

pub mod profile;
pub mod session;

// Re-export main types for convenience
pub use profile::UserProfile;
pub use session::Session;
