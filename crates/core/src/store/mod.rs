//! Entity store port and adapters.
//!
//! The engine persists seven independent keyed collections. The storage
//! backend is an external collaborator; this module defines the narrow
//! interface the engine needs (get-by-key, insert-or-replace, and full
//! scans for the collections the engine filters) plus an in-memory
//! adapter. No collection supports deletion: every entity, once created,
//! persists forever.
//!
//! Referential integrity between collections is entirely the engine's
//! responsibility; the store enforces nothing beyond key identity.

pub mod memory;

pub use memory::MemoryStore;

use auditra_shared::types::{AuditorId, CompanyId, DivisionId, RequestId, UserId};

use crate::company::{Auditor, Company, Division};
use crate::identity::User;
use crate::statement::{AuditStatement, FinancialStatement};
use crate::verification::VerificationRequest;

/// Keyed storage for the seven entity collections.
///
/// `put_*` methods have insert-or-replace semantics. Implementations need
/// no interior locking: the engine serializes every public operation in a
/// single critical section over the whole store.
pub trait EntityStore: Send + 'static {
    /// Looks up a user by id.
    fn user(&self, id: UserId) -> Option<User>;
    /// Inserts or replaces a user.
    fn put_user(&mut self, user: User);

    /// Looks up a company by id.
    fn company(&self, id: CompanyId) -> Option<Company>;
    /// Inserts or replaces a company.
    fn put_company(&mut self, company: Company);

    /// Looks up a division by id.
    fn division(&self, id: DivisionId) -> Option<Division>;
    /// Inserts or replaces a division.
    fn put_division(&mut self, division: Division);

    /// Looks up an auditor by id.
    fn auditor(&self, id: AuditorId) -> Option<Auditor>;
    /// Inserts or replaces an auditor.
    fn put_auditor(&mut self, auditor: Auditor);

    /// Looks up a verification request by id.
    fn request(&self, id: RequestId) -> Option<VerificationRequest>;
    /// Inserts or replaces a verification request.
    fn put_request(&mut self, request: VerificationRequest);
    /// Returns all verification requests (full scan, unordered).
    fn requests(&self) -> Vec<VerificationRequest>;

    /// Appends a financial statement.
    fn put_financial_statement(&mut self, statement: FinancialStatement);
    /// Returns all financial statements (full scan, unordered).
    fn financial_statements(&self) -> Vec<FinancialStatement>;

    /// Appends an audit statement.
    fn put_audit_statement(&mut self, statement: AuditStatement);
    /// Returns all audit statements (full scan, unordered).
    fn audit_statements(&self) -> Vec<AuditStatement>;
}
