//! In-memory entity store adapter.

use std::collections::HashMap;

use auditra_shared::types::{
    AuditorId, CompanyId, DivisionId, RequestId, StatementId, UserId,
};

use crate::company::{Auditor, Company, Division};
use crate::identity::User;
use crate::statement::{AuditStatement, FinancialStatement};
use crate::store::EntityStore;
use crate::verification::VerificationRequest;

/// In-memory implementation of [`EntityStore`].
///
/// Backs the engine in tests and single-process deployments. A durable
/// adapter can replace it without touching the engine.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: HashMap<UserId, User>,
    companies: HashMap<CompanyId, Company>,
    divisions: HashMap<DivisionId, Division>,
    auditors: HashMap<AuditorId, Auditor>,
    requests: HashMap<RequestId, VerificationRequest>,
    financial_statements: HashMap<StatementId, FinancialStatement>,
    audit_statements: HashMap<StatementId, AuditStatement>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntityStore for MemoryStore {
    fn user(&self, id: UserId) -> Option<User> {
        self.users.get(&id).cloned()
    }

    fn put_user(&mut self, user: User) {
        self.users.insert(user.id, user);
    }

    fn company(&self, id: CompanyId) -> Option<Company> {
        self.companies.get(&id).cloned()
    }

    fn put_company(&mut self, company: Company) {
        self.companies.insert(company.id, company);
    }

    fn division(&self, id: DivisionId) -> Option<Division> {
        self.divisions.get(&id).cloned()
    }

    fn put_division(&mut self, division: Division) {
        self.divisions.insert(division.id, division);
    }

    fn auditor(&self, id: AuditorId) -> Option<Auditor> {
        self.auditors.get(&id).cloned()
    }

    fn put_auditor(&mut self, auditor: Auditor) {
        self.auditors.insert(auditor.id, auditor);
    }

    fn request(&self, id: RequestId) -> Option<VerificationRequest> {
        self.requests.get(&id).cloned()
    }

    fn put_request(&mut self, request: VerificationRequest) {
        self.requests.insert(request.id, request);
    }

    fn requests(&self) -> Vec<VerificationRequest> {
        self.requests.values().cloned().collect()
    }

    fn put_financial_statement(&mut self, statement: FinancialStatement) {
        self.financial_statements.insert(statement.id, statement);
    }

    fn financial_statements(&self) -> Vec<FinancialStatement> {
        self.financial_statements.values().cloned().collect()
    }

    fn put_audit_statement(&mut self, statement: AuditStatement) {
        self.audit_statements.insert(statement.id, statement);
    }

    fn audit_statements(&self) -> Vec<AuditStatement> {
        self.audit_statements.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::CompanyProfile;
    use crate::identity::UserRole;
    use chrono::Utc;

    fn profile() -> CompanyProfile {
        CompanyProfile {
            name: "Acme".to_string(),
            category: "Retail".to_string(),
            address: String::new(),
            city: String::new(),
            province: String::new(),
            country: String::new(),
            postal_code: String::new(),
            email: String::new(),
            phone: String::new(),
            divisions: Vec::new(),
        }
    }

    #[test]
    fn test_get_missing_returns_none() {
        let store = MemoryStore::new();
        assert!(store.user(UserId::new()).is_none());
        assert!(store.company(CompanyId::new()).is_none());
        assert!(store.request(RequestId::new()).is_none());
    }

    #[test]
    fn test_put_then_get() {
        let mut store = MemoryStore::new();
        let company = Company::new(CompanyId::new(), profile(), Utc::now());
        let id = company.id;
        store.put_company(company);
        assert_eq!(store.company(id).unwrap().profile.name, "Acme");
    }

    #[test]
    fn test_put_replaces_existing() {
        let mut store = MemoryStore::new();
        let mut user = User::pending(UserId::new(), UserRole::Auditor, Utc::now());
        let id = user.id;
        store.put_user(user.clone());

        user.role = UserRole::DivisionManager;
        store.put_user(user);
        assert_eq!(store.user(id).unwrap().role, UserRole::DivisionManager);
    }

    #[test]
    fn test_scan_returns_all_requests() {
        let mut store = MemoryStore::new();
        for _ in 0..3 {
            store.put_request(VerificationRequest::new(
                RequestId::new(),
                UserId::new(),
                CompanyId::new(),
                crate::verification::RequestKind::Auditor,
                Utc::now(),
            ));
        }
        assert_eq!(store.requests().len(), 3);
    }
}
