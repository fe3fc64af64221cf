//! Verification request domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use auditra_shared::types::{CompanyId, RequestId, UserId};

use crate::error::AuditError;
use crate::identity::UserRole;

/// Status of a verification request.
///
/// The only valid transitions are `Waiting → Accepted` and
/// `Waiting → Rejected`; both targets are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    /// Awaiting a decision by the company executive.
    Waiting,
    /// Accepted; the subordinate entity exists and the user is promoted.
    Accepted,
    /// Rejected; the pending user stays unpromoted permanently.
    Rejected,
}

impl RequestStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "waiting" => Some(Self::Waiting),
            "accepted" => Some(Self::Accepted),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    /// Returns true once the status can never change again.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted | Self::Rejected)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What kind of authority a request asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum RequestKind {
    /// Verification of a named division.
    Division {
        /// Name of the division being verified.
        division_name: String,
    },
    /// Verification of an auditor.
    Auditor,
}

impl RequestKind {
    /// The role granted when a request of this kind is accepted.
    #[must_use]
    pub fn granted_role(&self) -> UserRole {
        match self {
            Self::Division { .. } => UserRole::DivisionManager,
            Self::Auditor => UserRole::Auditor,
        }
    }
}

/// A request for verification authority, owned by a company's executive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationRequest {
    /// Unique identifier.
    pub id: RequestId,
    /// The pending user awaiting promotion.
    pub user_id: UserId,
    /// The company the request targets.
    pub company_id: CompanyId,
    /// What the request asks for.
    #[serde(flatten)]
    pub kind: RequestKind,
    /// Current status.
    pub status: RequestStatus,
    /// When the request was submitted.
    pub created_at: DateTime<Utc>,
}

impl VerificationRequest {
    /// Creates a freshly submitted request in `Waiting` status.
    #[must_use]
    pub fn new(
        id: RequestId,
        user_id: UserId,
        company_id: CompanyId,
        kind: RequestKind,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            company_id,
            kind,
            status: RequestStatus::Waiting,
            created_at,
        }
    }

    /// Marks the request accepted.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::AlreadyResolved`] if the request already
    /// reached a terminal status.
    pub fn accept(&mut self) -> Result<(), AuditError> {
        self.transition(RequestStatus::Accepted)
    }

    /// Marks the request rejected.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::AlreadyResolved`] if the request already
    /// reached a terminal status.
    pub fn reject(&mut self) -> Result<(), AuditError> {
        self.transition(RequestStatus::Rejected)
    }

    fn transition(&mut self, to: RequestStatus) -> Result<(), AuditError> {
        if self.status.is_terminal() {
            return Err(AuditError::AlreadyResolved {
                request_id: self.id,
                status: self.status,
            });
        }
        self.status = to;
        Ok(())
    }
}
