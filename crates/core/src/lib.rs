//! Core business logic for Auditra.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! All domain types, validation rules, and the verification workflow live here.
//!
//! # Modules
//!
//! - `clock` - Injected wall-clock time source
//! - `company` - Company registration data
//! - `engine` - The audit workflow engine (public operation surface)
//! - `error` - Domain error taxonomy
//! - `identity` - Users, roles, and the access control guard
//! - `statement` - Uploaded financial and audit statements
//! - `store` - Entity store port and in-memory adapter
//! - `verification` - Verification request lifecycle

pub mod clock;
pub mod company;
pub mod engine;
pub mod error;
pub mod identity;
pub mod statement;
pub mod store;
pub mod verification;

pub use clock::{Clock, ManualClock, SystemClock};
pub use company::{Auditor, Company, CompanyProfile, Division};
pub use engine::{AuditEngine, CompanyRegistration, RequestTicket, VerifiedParty};
pub use error::{AuditError, ErrorKind};
pub use identity::{Assignment, User, UserRole};
pub use statement::{AuditStatement, FinancialStatement};
pub use store::{EntityStore, MemoryStore};
pub use verification::{RequestKind, RequestStatus, VerificationRequest};
