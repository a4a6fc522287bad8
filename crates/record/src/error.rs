use thiserror::Error;

/// Errors produced while validating candidate records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// `full_name` is empty or whitespace-only after trimming.
    #[error("candidate record requires a non-empty full_name")]
    EmptyFullName,
}
