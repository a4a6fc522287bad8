//! Core data model types for duplicate resolution.
//!
//! A [`CandidateRecord`] is the inbound record a caller wants to create; an
//! [`ExistingEntity`] is a read-only snapshot of an already-known entity
//! supplied by the caller's record store. Both are built for a single
//! resolution call and discarded after it.
use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// The inbound record to be checked for duplicates.
///
/// Only `full_name` is required; the optional fields widen the set of
/// comparison rules that can fire. Construct with [`CandidateRecord::new`]
/// plus the `with_*` builders, or deserialize from JSON where the optional
/// fields may be omitted entirely.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CandidateRecord {
    /// Display name of the person or organization. Required, and must be
    /// non-empty after trimming (see [`CandidateRecord::validate`]).
    pub full_name: String,
    /// Company the candidate is associated with, when known.
    #[serde(default)]
    pub company_name: Option<String>,
    /// Contact phone number, as entered. Compared whitespace-insensitively.
    #[serde(default)]
    pub phone: Option<String>,
    /// Contact email address. Compared case-insensitively.
    #[serde(default)]
    pub email: Option<String>,
}

impl CandidateRecord {
    /// Build a candidate with only the required name set.
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            company_name: None,
            phone: None,
            email: None,
        }
    }

    /// Set the company name.
    pub fn with_company_name(mut self, company_name: impl Into<String>) -> Self {
        self.company_name = Some(company_name.into());
        self
    }

    /// Set the phone number.
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Set the email address.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Check the required-field invariant.
    ///
    /// A candidate whose `full_name` trims to empty would fuzzy-match every
    /// entity with a short name, so it is rejected outright.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.full_name.trim().is_empty() {
            return Err(RecordError::EmptyFullName);
        }
        Ok(())
    }
}

/// A read-only snapshot of an entity already known to the caller's store.
///
/// Every identity field is optional; rows fetched from real stores are
/// routinely sparse. `attributes` carries whatever extra columns the store
/// returned and is never inspected here, only passed through with the
/// matched entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExistingEntity {
    /// Opaque identifier assigned by the record store.
    pub id: String,
    /// Display name, when the store has one.
    #[serde(default)]
    pub name: Option<String>,
    /// Associated company, when known.
    #[serde(default)]
    pub company: Option<String>,
    /// Contact phone number, as stored.
    #[serde(default)]
    pub phone: Option<String>,
    /// Contact email address, as stored.
    #[serde(default)]
    pub email: Option<String>,
    /// Arbitrary additional attributes preserved untouched.
    #[serde(default)]
    pub attributes: Option<serde_json::Value>,
}
