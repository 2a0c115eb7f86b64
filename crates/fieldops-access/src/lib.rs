//! # Fieldops Access Control
//!
//! This crate provides role-based access control for the Fieldops
//! campaign-operations dashboard: route guards, conditional rendering,
//! and admin-action gating all read their decisions from here.
//!
//! ## Overview
//!
//! The fieldops-access crate handles:
//! - **Roles**: The fixed role hierarchy users are assigned into
//! - **Access decisions**: Hierarchy and allow-list evaluation
//! - **Features**: The registry of gated dashboard surfaces
//! - **Errors**: Typed denial surfacing for guard-style callers
//!
//! ## Role Hierarchy
//!
//! ```text
//! Vendor < Client < Executive < Manager < Admin
//!
//! A higher-ranked role satisfies any requirement expressed by a lower
//! one. An explicit allow-list is the exception: it expresses exact
//! membership and ignores the hierarchy entirely.
//! ```
//!
//! ## Fail Closed
//!
//! A caller without a role (not signed in, profile still loading) is
//! denied everywhere. An indeterminate role is never an error, only a
//! denial; nothing in this crate panics or returns a fault for any input.
//!
//! ## Usage
//!
//! ```rust
//! use fieldops_access::{can_access_feature, has_access, Role};
//!
//! // Hierarchy check: admin clears the manager bar
//! assert!(has_access(Some(Role::Admin), Some(Role::Manager), None));
//!
//! // Allow-list check: exact membership, hierarchy ignored
//! assert!(!has_access(Some(Role::Admin), None, Some(&[Role::Vendor])));
//!
//! // Feature registry: unknown keys are accessible to nobody
//! assert!(can_access_feature(Some(Role::Admin), "system-settings"));
//! assert!(!can_access_feature(Some(Role::Admin), "unknown-feature-xyz"));
//! ```

pub mod access;
pub mod error;
pub mod features;
pub mod roles;

// Re-export main types for convenience
pub use access::{has_access, AccessRequest};
pub use error::{require_access, require_feature, AccessError, AccessResult};
pub use features::{can_access_feature, known_features, roles_for_feature};
pub use roles::{display_label, Role};
