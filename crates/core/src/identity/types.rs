//! Identity domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use auditra_shared::types::{AuditorId, CompanyId, DivisionId, UserId};

/// Role a user currently holds.
///
/// Roles form a closed set with no hierarchy: an operation requiring one
/// role rejects every other role, including "higher" ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Controls a company and decides on verification requests.
    Executive,
    /// Uploads audit statements once verified.
    Auditor,
    /// Uploads financial statements for a division once verified.
    DivisionManager,
}

impl UserRole {
    /// Returns the string representation of the role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Executive => "executive",
            Self::Auditor => "auditor",
            Self::DivisionManager => "division_manager",
        }
    }

    /// Parses a role from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "executive" => Some(Self::Executive),
            "auditor" => Some(Self::Auditor),
            "division_manager" => Some(Self::DivisionManager),
            _ => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The entity a user currently controls.
///
/// This is a non-owning back-reference resolved by lookup; the referenced
/// entity's lifetime is independent of the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum Assignment {
    /// An executive's company.
    Company(CompanyId),
    /// A division manager's verified division.
    Division(DivisionId),
    /// An auditor's verified auditor record.
    Auditor(AuditorId),
}

/// A user of the audit workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: UserId,
    /// Current role.
    pub role: UserRole,
    /// The entity this user currently controls, or `None` while a
    /// verification request is still pending.
    pub assignment: Option<Assignment>,
    /// When the user was created. Survives promotion.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates the executive controlling a freshly registered company.
    #[must_use]
    pub fn executive(id: UserId, company_id: CompanyId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            role: UserRole::Executive,
            assignment: Some(Assignment::Company(company_id)),
            created_at,
        }
    }

    /// Creates a pending user awaiting verification.
    ///
    /// The user already carries the requested role but controls nothing
    /// until the request is accepted.
    #[must_use]
    pub fn pending(id: UserId, role: UserRole, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            role,
            assignment: None,
            created_at,
        }
    }

    /// Overwrites role and assignment wholesale on promotion.
    ///
    /// `created_at` is preserved.
    pub fn promote(&mut self, role: UserRole, assignment: Assignment) {
        self.role = role;
        self.assignment = Some(assignment);
    }

    /// The company this user controls, if they are an assigned executive.
    #[must_use]
    pub fn company_id(&self) -> Option<CompanyId> {
        match self.assignment {
            Some(Assignment::Company(id)) => Some(id),
            _ => None,
        }
    }

    /// The division this user controls, if they are a verified manager.
    #[must_use]
    pub fn division_id(&self) -> Option<DivisionId> {
        match self.assignment {
            Some(Assignment::Division(id)) => Some(id),
            _ => None,
        }
    }

    /// The auditor record this user controls, if they are verified.
    #[must_use]
    pub fn auditor_id(&self) -> Option<AuditorId> {
        match self.assignment {
            Some(Assignment::Auditor(id)) => Some(id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_as_str() {
        assert_eq!(UserRole::Executive.as_str(), "executive");
        assert_eq!(UserRole::Auditor.as_str(), "auditor");
        assert_eq!(UserRole::DivisionManager.as_str(), "division_manager");
    }

    #[test]
    fn test_role_parse() {
        assert_eq!(UserRole::parse("executive"), Some(UserRole::Executive));
        assert_eq!(UserRole::parse("AUDITOR"), Some(UserRole::Auditor));
        assert_eq!(
            UserRole::parse("Division_Manager"),
            Some(UserRole::DivisionManager)
        );
        assert_eq!(UserRole::parse("manager"), None);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(format!("{}", UserRole::Executive), "executive");
        assert_eq!(format!("{}", UserRole::DivisionManager), "division_manager");
    }

    #[test]
    fn test_executive_controls_company() {
        let company_id = CompanyId::new();
        let user = User::executive(UserId::new(), company_id, Utc::now());
        assert_eq!(user.role, UserRole::Executive);
        assert_eq!(user.company_id(), Some(company_id));
        assert_eq!(user.division_id(), None);
    }

    #[test]
    fn test_pending_user_controls_nothing() {
        let user = User::pending(UserId::new(), UserRole::DivisionManager, Utc::now());
        assert!(user.assignment.is_none());
        assert_eq!(user.company_id(), None);
        assert_eq!(user.division_id(), None);
        assert_eq!(user.auditor_id(), None);
    }

    #[test]
    fn test_promote_overwrites_wholesale_but_keeps_created_at() {
        let created = Utc::now();
        let mut user = User::pending(UserId::new(), UserRole::Auditor, created);
        let auditor_id = AuditorId::new();
        user.promote(UserRole::Auditor, Assignment::Auditor(auditor_id));
        assert_eq!(user.role, UserRole::Auditor);
        assert_eq!(user.auditor_id(), Some(auditor_id));
        assert_eq!(user.created_at, created);
    }
}
