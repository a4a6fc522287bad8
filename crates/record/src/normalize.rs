//! Field normalization shared by every comparison rule.
//!
//! Two deliberately narrow helpers live here. Name, company, and email
//! comparisons use [`normalize_text`]; phone comparisons use
//! [`normalize_phone`]. Neither collapses or rewrites the interior of a
//! value: internal whitespace differences in a name are signal for the
//! similarity metric, and punctuation in a phone number (`+`, `-`,
//! parentheses) is part of the compared value.

/// Lowercase and trim leading/trailing whitespace.
///
/// Internal whitespace and punctuation are preserved, so `"John  Smith"`
/// and `"John Smith"` remain distinct values.
///
/// ```rust
/// use record::normalize_text;
///
/// assert_eq!(normalize_text("  John Smith "), "john smith");
/// assert_eq!(normalize_text("ACME  Realty"), "acme  realty");
/// ```
pub fn normalize_text(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Remove all whitespace from a phone number, including internal runs.
///
/// Punctuation is kept: `"027-321-3749"` and `"0273213749"` do not
/// normalize to the same value, while `"027 321 3749"` does.
///
/// ```rust
/// use record::normalize_phone;
///
/// assert_eq!(normalize_phone("027 321 3749"), "0273213749");
/// assert_eq!(normalize_phone("+64 27 321 3749"), "+64273213749");
/// assert_eq!(normalize_phone("027-321-3749"), "027-321-3749");
/// ```
pub fn normalize_phone(phone: &str) -> String {
    phone.chars().filter(|ch| !ch.is_whitespace()).collect()
}
