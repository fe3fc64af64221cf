//! Companies and the verified entities created under them.

pub mod types;

pub use types::{Auditor, Company, CompanyProfile, Division};
