//! The audit workflow engine.
//!
//! This is the public operation surface of the core: company registration,
//! the verification request lifecycle, and statement ingestion. Every
//! operation resolves the caller, applies the access control guard, then
//! performs its state transition inside one critical section over the
//! whole store, so multi-collection fan-out (company + executive creation,
//! acceptance promoting a user) is observed atomically by later readers.
//!
//! Within the critical section, writes go subordinate-records-first: the
//! record that makes new state reachable (the resolved request, the
//! promoted user) is written after the records it points at, so a durable
//! adapter persisting writes in call order never exposes a dangling
//! reference.

use parking_lot::Mutex;
use serde::Serialize;

use auditra_shared::types::{AuditorId, CompanyId, DivisionId, RequestId, StatementId, UserId};

use crate::clock::{Clock, SystemClock};
use crate::company::{Auditor, Company, CompanyProfile, Division};
use crate::error::AuditError;
use crate::identity::{Assignment, User, UserRole, guard};
use crate::statement::{AuditStatement, FinancialStatement};
use crate::store::EntityStore;
use crate::verification::{RequestKind, RequestStatus, VerificationRequest};


/// Identifiers generated by a successful company registration.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CompanyRegistration {
    /// The new company.
    pub company_id: CompanyId,
    /// The executive user controlling it.
    pub executive_id: UserId,
}

/// Identifiers generated by a submitted verification request.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RequestTicket {
    /// The new request.
    pub request_id: RequestId,
    /// The pending user awaiting promotion.
    pub user_id: UserId,
}

/// The entity created by an accepted verification request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum VerifiedParty {
    /// A division was verified.
    Division(Division),
    /// An auditor was verified.
    Auditor(Auditor),
}

/// The audit workflow engine.
///
/// Generic over the store adapter and the clock so tests run against the
/// in-memory store with pinned time.
pub struct AuditEngine<S: EntityStore, C: Clock = SystemClock> {
    store: Mutex<S>,
    clock: C,
}

impl<S: EntityStore> AuditEngine<S> {
    /// Creates an engine over the given store using the system clock.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: EntityStore, C: Clock> AuditEngine<S, C> {
    /// Creates an engine with an explicit clock.
    #[must_use]
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            store: Mutex::new(store),
            clock,
        }
    }

    /// Registers a company together with the executive user controlling it.
    ///
    /// Returns the generated identifiers so the caller can address both
    /// records afterwards.
    pub fn register_company(
        &self,
        profile: CompanyProfile,
    ) -> Result<CompanyRegistration, AuditError> {
        profile.validate()?;

        let mut store = self.store.lock();
        let now = self.clock.now();
        let company = Company::new(CompanyId::new(), profile, now);
        let executive = User::executive(UserId::new(), company.id, now);
        let registration = CompanyRegistration {
            company_id: company.id,
            executive_id: executive.id,
        };

        store.put_company(company);
        store.put_user(executive);
        Ok(registration)
    }

    /// Returns the company with the given id.
    pub fn company(&self, id: CompanyId) -> Result<Company, AuditError> {
        self.store
            .lock()
            .company(id)
            .ok_or(AuditError::CompanyNotFound(id))
    }

    /// Replaces a company's whole profile.
    ///
    /// `created_at` is preserved; `updated_at` advances.
    pub fn update_company(
        &self,
        id: CompanyId,
        profile: CompanyProfile,
    ) -> Result<Company, AuditError> {
        profile.validate()?;

        let mut store = self.store.lock();
        let mut company = store.company(id).ok_or(AuditError::CompanyNotFound(id))?;
        company.update_profile(profile, self.clock.now());
        store.put_company(company.clone());
        Ok(company)
    }

    /// Submits a division verification request against a company.
    ///
    /// Creates the pending division-manager user and the waiting request
    /// together.
    pub fn submit_division_request(
        &self,
        company_id: CompanyId,
        division_name: &str,
    ) -> Result<RequestTicket, AuditError> {
        let division_name = division_name.trim();
        if division_name.is_empty() {
            return Err(AuditError::EmptyField {
                field: "division_name",
            });
        }
        self.submit_request(
            company_id,
            RequestKind::Division {
                division_name: division_name.to_string(),
            },
        )
    }

    /// Submits an auditor verification request against a company.
    pub fn submit_auditor_request(
        &self,
        company_id: CompanyId,
    ) -> Result<RequestTicket, AuditError> {
        self.submit_request(company_id, RequestKind::Auditor)
    }

    fn submit_request(
        &self,
        company_id: CompanyId,
        kind: RequestKind,
    ) -> Result<RequestTicket, AuditError> {
        let mut store = self.store.lock();
        if store.company(company_id).is_none() {
            return Err(AuditError::CompanyNotFound(company_id));
        }

        let now = self.clock.now();
        let user = User::pending(UserId::new(), kind.granted_role(), now);
        let request =
            VerificationRequest::new(RequestId::new(), user.id, company_id, kind, now);
        let ticket = RequestTicket {
            request_id: request.id,
            user_id: user.id,
        };

        store.put_user(user);
        store.put_request(request);
        Ok(ticket)
    }

    /// Returns every request against the caller's own company.
    ///
    /// The caller must be the company's executive.
    pub fn requests(&self, caller: UserId) -> Result<Vec<VerificationRequest>, AuditError> {
        self.company_requests(caller, |_| true)
    }

    /// Returns the still-waiting requests against the caller's own company.
    pub fn waiting_requests(
        &self,
        caller: UserId,
    ) -> Result<Vec<VerificationRequest>, AuditError> {
        self.company_requests(caller, |r| r.status == RequestStatus::Waiting)
    }

    fn company_requests(
        &self,
        caller: UserId,
        keep: impl Fn(&VerificationRequest) -> bool,
    ) -> Result<Vec<VerificationRequest>, AuditError> {
        let store = self.store.lock();
        let caller = Self::resolve_user(&*store, caller)?;
        let company_id = guard::executive_company(&caller)?;

        let mut requests: Vec<_> = store
            .requests()
            .into_iter()
            .filter(|r| r.company_id == company_id && keep(r))
            .collect();
        requests.sort_by_key(|r| r.created_at);
        Ok(requests)
    }

    /// Accepts a waiting request, creating the verified entity and
    /// promoting the pending user.
    ///
    /// Only the executive of the company the request targets may accept
    /// it, and a request can be resolved exactly once.
    pub fn accept_request(
        &self,
        caller: UserId,
        request_id: RequestId,
    ) -> Result<VerifiedParty, AuditError> {
        let mut store = self.store.lock();
        let caller = Self::resolve_user(&*store, caller)?;
        guard::executive_company(&caller)?;
        let mut request = store
            .request(request_id)
            .ok_or(AuditError::RequestNotFound(request_id))?;
        guard::require_company_owner(&caller, request.company_id)?;
        request.accept()?;

        let mut pending = store
            .user(request.user_id)
            .ok_or(AuditError::UserNotFound(request.user_id))?;
        let now = self.clock.now();

        let party = match &request.kind {
            RequestKind::Division { division_name } => {
                let division = Division {
                    id: DivisionId::new(),
                    company_id: request.company_id,
                    division_name: division_name.clone(),
                    verified_at: now,
                };
                pending.promote(UserRole::DivisionManager, Assignment::Division(division.id));
                store.put_division(division.clone());
                VerifiedParty::Division(division)
            }
            RequestKind::Auditor => {
                let auditor = Auditor {
                    id: AuditorId::new(),
                    company_id: request.company_id,
                    verified_at: now,
                };
                pending.promote(UserRole::Auditor, Assignment::Auditor(auditor.id));
                store.put_auditor(auditor.clone());
                VerifiedParty::Auditor(auditor)
            }
        };

        store.put_user(pending);
        store.put_request(request);
        Ok(party)
    }

    /// Rejects a waiting request.
    ///
    /// Only the request transitions; the pending user stays unpromoted
    /// permanently.
    pub fn reject_request(&self, caller: UserId, request_id: RequestId) -> Result<(), AuditError> {
        let mut store = self.store.lock();
        let caller = Self::resolve_user(&*store, caller)?;
        guard::executive_company(&caller)?;
        let mut request = store
            .request(request_id)
            .ok_or(AuditError::RequestNotFound(request_id))?;
        guard::require_company_owner(&caller, request.company_id)?;
        request.reject()?;

        store.put_request(request);
        Ok(())
    }

    /// Appends a financial statement uploaded by a verified division
    /// manager.
    pub fn upload_financial_statement(
        &self,
        caller: UserId,
        url: &str,
    ) -> Result<FinancialStatement, AuditError> {
        let url = Self::validate_url(url)?;

        let mut store = self.store.lock();
        let user = Self::resolve_user(&*store, caller)?;
        guard::require_role(&user, UserRole::DivisionManager)?;
        let division_id = user.division_id().ok_or(AuditError::NotVerified(user.id))?;
        let division = store
            .division(division_id)
            .ok_or(AuditError::DivisionNotFound(division_id))?;

        let statement = FinancialStatement {
            id: StatementId::new(),
            company_id: division.company_id,
            url,
            uploaded_by: division.id,
            uploaded_at: self.clock.now(),
        };
        store.put_financial_statement(statement.clone());
        Ok(statement)
    }

    /// Appends an audit statement uploaded by a verified auditor.
    pub fn upload_audit_statement(
        &self,
        caller: UserId,
        url: &str,
    ) -> Result<AuditStatement, AuditError> {
        let url = Self::validate_url(url)?;

        let mut store = self.store.lock();
        let user = Self::resolve_user(&*store, caller)?;
        guard::require_role(&user, UserRole::Auditor)?;
        let auditor_id = user.auditor_id().ok_or(AuditError::NotVerified(user.id))?;
        let auditor = store
            .auditor(auditor_id)
            .ok_or(AuditError::AuditorNotFound(auditor_id))?;

        let statement = AuditStatement {
            id: StatementId::new(),
            company_id: auditor.company_id,
            url,
            uploaded_by: auditor.id,
            uploaded_at: self.clock.now(),
        };
        store.put_audit_statement(statement.clone());
        Ok(statement)
    }

    /// Returns the financial statements uploaded for the caller's own
    /// company.
    ///
    /// The caller must be the company's executive.
    pub fn financial_statements(
        &self,
        caller: UserId,
    ) -> Result<Vec<FinancialStatement>, AuditError> {
        let store = self.store.lock();
        let caller = Self::resolve_user(&*store, caller)?;
        let company_id = guard::executive_company(&caller)?;

        let mut statements: Vec<_> = store
            .financial_statements()
            .into_iter()
            .filter(|s| s.company_id == company_id)
            .collect();
        statements.sort_by_key(|s| s.uploaded_at);
        Ok(statements)
    }

    /// Returns the audit statements uploaded for the caller's own company.
    pub fn audit_statements(&self, caller: UserId) -> Result<Vec<AuditStatement>, AuditError> {
        let store = self.store.lock();
        let caller = Self::resolve_user(&*store, caller)?;
        let company_id = guard::executive_company(&caller)?;

        let mut statements: Vec<_> = store
            .audit_statements()
            .into_iter()
            .filter(|s| s.company_id == company_id)
            .collect();
        statements.sort_by_key(|s| s.uploaded_at);
        Ok(statements)
    }

    /// Resolves a user by id.
    ///
    /// Lets a pending user observe their own promotion state.
    pub fn user(&self, id: UserId) -> Result<User, AuditError> {
        Self::resolve_user(&*self.store.lock(), id)
    }

    fn resolve_user(store: &S, id: UserId) -> Result<User, AuditError> {
        store.user(id).ok_or(AuditError::UserNotFound(id))
    }

    fn validate_url(url: &str) -> Result<String, AuditError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(AuditError::EmptyField { field: "url" });
        }
        Ok(url.to_string())
    }
}
