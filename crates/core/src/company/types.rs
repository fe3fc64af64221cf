//! Company domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use auditra_shared::types::{AuditorId, CompanyId, DivisionId};

use crate::error::AuditError;

/// Descriptive company fields supplied by callers.
///
/// The profile is replaced wholesale on update; individual fields are never
/// merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    /// Legal company name.
    pub name: String,
    /// Business category.
    pub category: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// City.
    #[serde(default)]
    pub city: String,
    /// Province or state.
    #[serde(default)]
    pub province: String,
    /// Country.
    #[serde(default)]
    pub country: String,
    /// Postal code.
    #[serde(default)]
    pub postal_code: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Division names the company declares up front. Declaring a name here
    /// does not create a division; divisions exist only through accepted
    /// verification requests.
    #[serde(default)]
    pub divisions: Vec<String>,
}

impl CompanyProfile {
    /// Validates the fields that gate registration.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::EmptyField`] if `name` or `category` is empty.
    pub fn validate(&self) -> Result<(), AuditError> {
        if self.name.trim().is_empty() {
            return Err(AuditError::EmptyField { field: "name" });
        }
        if self.category.trim().is_empty() {
            return Err(AuditError::EmptyField { field: "category" });
        }
        Ok(())
    }
}

/// A registered company.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier.
    pub id: CompanyId,
    /// Descriptive fields.
    #[serde(flatten)]
    pub profile: CompanyProfile,
    /// When the company was registered. Immutable across updates.
    pub created_at: DateTime<Utc>,
    /// When the company was last updated. Advances monotonically.
    pub updated_at: DateTime<Utc>,
}

impl Company {
    /// Creates a company at registration time.
    ///
    /// `created_at` and `updated_at` start equal.
    #[must_use]
    pub fn new(id: CompanyId, profile: CompanyProfile, now: DateTime<Utc>) -> Self {
        Self {
            id,
            profile,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the whole profile, advancing `updated_at`.
    pub fn update_profile(&mut self, profile: CompanyProfile, now: DateTime<Utc>) {
        self.profile = profile;
        self.updated_at = now;
    }
}

/// A division verified through an accepted verification request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Division {
    /// Unique identifier.
    pub id: DivisionId,
    /// The company this division belongs to.
    pub company_id: CompanyId,
    /// Division name taken from the originating request.
    pub division_name: String,
    /// When the division was verified.
    pub verified_at: DateTime<Utc>,
}

/// An auditor verified through an accepted verification request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Auditor {
    /// Unique identifier.
    pub id: AuditorId,
    /// The company this auditor is verified for.
    pub company_id: CompanyId,
    /// When the auditor was verified.
    pub verified_at: DateTime<Utc>,
}
