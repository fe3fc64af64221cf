//! Cross-cutting role and ownership checks.
//!
//! Every engine operation applies the same sequence: resolve the caller,
//! check the required role by exact match, and for operations that touch a
//! target entity, check that the entity belongs to the caller's company.

use auditra_shared::types::CompanyId;

use crate::error::AuditError;
use crate::identity::types::{User, UserRole};

/// Checks that the user's role matches the required role exactly.
///
/// There is no role hierarchy: an executive does not implicitly gain
/// auditor privileges, and vice versa.
pub fn require_role(user: &User, required: UserRole) -> Result<(), AuditError> {
    if user.role == required {
        Ok(())
    } else {
        Err(AuditError::RoleMismatch {
            required,
            actual: user.role,
        })
    }
}

/// Resolves the company an executive caller controls.
pub fn executive_company(user: &User) -> Result<CompanyId, AuditError> {
    require_role(user, UserRole::Executive)?;
    user.company_id().ok_or(AuditError::NotVerified(user.id))
}

/// Checks that the caller is the executive of the given company.
///
/// This is what scopes an executive to their own company's requests and
/// statements; there is no cross-company visibility.
pub fn require_company_owner(user: &User, company_id: CompanyId) -> Result<(), AuditError> {
    if executive_company(user)? == company_id {
        Ok(())
    } else {
        Err(AuditError::NotCompanyOwner {
            user_id: user.id,
            company_id,
        })
    }
}
