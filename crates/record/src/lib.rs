//! Record layer for entity duplicate resolution.
//!
//! This crate owns the typed data model ([`CandidateRecord`],
//! [`ExistingEntity`]), the candidate-validation rule, and the field
//! normalization every comparison rule shares. Downstream crates rely on it
//! for one thing: two values that should compare equal under a rule
//! normalize to identical strings here.
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. Normalization depends
//! only on the input string, so the same record always validates and
//! normalizes the same way on any machine.
//!
//! ## Invariants worth knowing
//!
//! - `normalize_text` trims and lowercases; it never touches internal
//!   whitespace or punctuation.
//! - `normalize_phone` removes whitespace only; punctuation stays.
//! - A valid candidate has a `full_name` that survives trimming.

mod error;
mod normalize;
mod types;

pub use crate::error::RecordError;
pub use crate::normalize::{normalize_phone, normalize_text};
pub use crate::types::{CandidateRecord, ExistingEntity};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_fields_agree_across_representations() {
        let candidate = CandidateRecord::new("  JOHN smith ")
            .with_company_name(" Acme Realty")
            .with_phone("027 321 3749");

        assert_eq!(normalize_text(&candidate.full_name), "john smith");
        assert_eq!(
            candidate.company_name.as_deref().map(normalize_text),
            Some("acme realty".to_string())
        );
        assert_eq!(
            candidate.phone.as_deref().map(normalize_phone),
            Some("0273213749".to_string())
        );
    }

    #[test]
    fn validation_is_trim_aware() {
        assert!(CandidateRecord::new(" J ").validate().is_ok());
        assert_eq!(
            CandidateRecord::new(" ").validate(),
            Err(RecordError::EmptyFullName)
        );
    }
}
