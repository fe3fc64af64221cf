//! Verification request lifecycle.
//!
//! A request is created in `Waiting` status together with its pending user,
//! and is resolved exactly once by the owning executive: acceptance fans out
//! into a new division or auditor, rejection leaves only a terminal mark.
//!
//! # Modules
//!
//! - `types` - Request entity, kind tag, and status state machine

pub mod types;

#[cfg(test)]
mod status_props;

pub use types::{RequestKind, RequestStatus, VerificationRequest};
