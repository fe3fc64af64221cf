//! Users, roles, and the access control guard.
//!
//! This module is the single source of truth for "who is this caller and
//! what can they currently do".
//!
//! # Modules
//!
//! - `types` - User entity, role enumeration, and assignment references
//! - `guard` - Cross-cutting role and ownership checks

pub mod guard;
pub mod types;

pub use types::{Assignment, User, UserRole};
