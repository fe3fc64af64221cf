//! Uploaded financial and audit statements.
//!
//! Statements are append-only: once uploaded they are never updated or
//! deleted, and no deduplication is applied.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use auditra_shared::types::{AuditorId, CompanyId, DivisionId, StatementId};

/// A financial statement uploaded by a verified division.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialStatement {
    /// Unique identifier.
    pub id: StatementId,
    /// The company the statement belongs to.
    pub company_id: CompanyId,
    /// Location of the statement document.
    pub url: String,
    /// The division that uploaded it.
    pub uploaded_by: DivisionId,
    /// When it was uploaded.
    pub uploaded_at: DateTime<Utc>,
}

/// An audit statement uploaded by a verified auditor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditStatement {
    /// Unique identifier.
    pub id: StatementId,
    /// The company the statement belongs to.
    pub company_id: CompanyId,
    /// Location of the statement document.
    pub url: String,
    /// The auditor that uploaded it.
    pub uploaded_by: AuditorId,
    /// When it was uploaded.
    pub uploaded_at: DateTime<Utc>,
}
