//! Domain error taxonomy.
//!
//! Every failure the engine can produce maps to one of four closed kinds
//! (`BadPayload`, `NotFound`, `Forbidden`, `Conflict`) so transport layers
//! can translate errors mechanically.

use thiserror::Error;

use auditra_shared::types::{AuditorId, CompanyId, DivisionId, RequestId, UserId};

use crate::identity::UserRole;
use crate::verification::RequestStatus;

/// Closed classification of domain errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required argument was missing or empty.
    BadPayload,
    /// A referenced entity id does not resolve.
    NotFound,
    /// The caller resolved but lacks the required role or ownership.
    Forbidden,
    /// The operation would re-resolve an already-terminal request.
    Conflict,
}

/// Errors produced by the audit workflow engine.
#[derive(Debug, Error)]
pub enum AuditError {
    /// A required field was empty.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Name of the offending field.
        field: &'static str,
    },

    /// No user exists with the given id.
    #[error("User {0} not found")]
    UserNotFound(UserId),

    /// No company exists with the given id.
    #[error("Company {0} not found")]
    CompanyNotFound(CompanyId),

    /// No verification request exists with the given id.
    #[error("Request {0} not found")]
    RequestNotFound(RequestId),

    /// No division exists with the given id.
    #[error("Division {0} not found")]
    DivisionNotFound(DivisionId),

    /// No auditor exists with the given id.
    #[error("Auditor {0} not found")]
    AuditorNotFound(AuditorId),

    /// The caller has not been verified yet, so there is no entity
    /// under their control.
    #[error("User {0} has no verified assignment")]
    NotVerified(UserId),

    /// The caller's role does not match the required role exactly.
    #[error("Role {actual} does not grant {required} access")]
    RoleMismatch {
        /// The role the operation requires.
        required: UserRole,
        /// The caller's actual role.
        actual: UserRole,
    },

    /// The caller is an executive, but not of the company the target
    /// entity belongs to.
    #[error("User {user_id} does not control company {company_id}")]
    NotCompanyOwner {
        /// The caller.
        user_id: UserId,
        /// The company the target entity belongs to.
        company_id: CompanyId,
    },

    /// The request already reached a terminal status.
    #[error("Request {request_id} was already {status}")]
    AlreadyResolved {
        /// The request being re-resolved.
        request_id: RequestId,
        /// The terminal status it already holds.
        status: RequestStatus,
    },
}

impl AuditError {
    /// Returns the closed error kind for this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyField { .. } => ErrorKind::BadPayload,
            Self::UserNotFound(_)
            | Self::CompanyNotFound(_)
            | Self::RequestNotFound(_)
            | Self::DivisionNotFound(_)
            | Self::AuditorNotFound(_)
            | Self::NotVerified(_) => ErrorKind::NotFound,
            Self::RoleMismatch { .. } | Self::NotCompanyOwner { .. } => ErrorKind::Forbidden,
            Self::AlreadyResolved { .. } => ErrorKind::Conflict,
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::BadPayload => 400,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyField { .. } => "EMPTY_FIELD",
            Self::UserNotFound(_) => "USER_NOT_FOUND",
            Self::CompanyNotFound(_) => "COMPANY_NOT_FOUND",
            Self::RequestNotFound(_) => "REQUEST_NOT_FOUND",
            Self::DivisionNotFound(_) => "DIVISION_NOT_FOUND",
            Self::AuditorNotFound(_) => "AUDITOR_NOT_FOUND",
            Self::NotVerified(_) => "NOT_VERIFIED",
            Self::RoleMismatch { .. } => "ROLE_MISMATCH",
            Self::NotCompanyOwner { .. } => "NOT_COMPANY_OWNER",
            Self::AlreadyResolved { .. } => "ALREADY_RESOLVED",
        }
    }
}
