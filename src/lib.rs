//! Workspace umbrella crate for entity duplicate resolution (dupres).
//!
//! This crate stitches together record validation, name similarity, and the
//! rule-based match engine so callers can resolve an inbound candidate against
//! an entity corpus with a single API entry point.

pub use matcher::{
    DuplicateMatch, MatchConfig, MatchError, MatchTier, ResolutionMetrics, find_duplicate,
    find_duplicate_with_config, set_resolution_metrics,
};
pub use record::{CandidateRecord, ExistingEntity, RecordError, normalize_phone, normalize_text};
pub use similarity::{levenshtein, similarity};

/// Resolve a candidate record against an entity corpus using default thresholds.
/// Blank `full_name` values produce a `MatchError::InvalidCandidate`.
pub fn resolve_candidate<'a>(
    candidate: &CandidateRecord,
    corpus: &'a [ExistingEntity],
) -> Result<Option<DuplicateMatch<'a>>, MatchError> {
    find_duplicate(candidate, corpus)
}

/// Resolve a candidate record with explicit threshold configuration.
pub fn resolve_candidate_with_config<'a>(
    candidate: &CandidateRecord,
    corpus: &'a [ExistingEntity],
    cfg: &MatchConfig,
) -> Result<Option<DuplicateMatch<'a>>, MatchError> {
    find_duplicate_with_config(candidate, corpus, cfg)
}
