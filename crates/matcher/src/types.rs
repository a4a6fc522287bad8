use record::{ExistingEntity, RecordError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Confidence tier of a duplicate match.
///
/// Severity order is fixed: `Exact > High > Uncertain`. The engine uses it
/// to pick a single winner when several corpus entities match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MatchTier {
    /// An exact-field rule fired: same name and company, same phone, or
    /// same email.
    Exact,
    /// Fuzzy name similarity at or above the high threshold.
    High,
    /// Fuzzy name similarity inside the uncertain band.
    Uncertain,
}

impl MatchTier {
    /// Numeric severity used to rank competing matches. Higher wins.
    pub fn severity(&self) -> u8 {
        match self {
            MatchTier::Exact => 3,
            MatchTier::High => 2,
            MatchTier::Uncertain => 1,
        }
    }

    /// Whether callers are expected to block or warn before creating the
    /// candidate as a new entity. Advisory; the engine never enforces it.
    pub fn blocks_creation(&self) -> bool {
        matches!(self, MatchTier::Exact | MatchTier::High)
    }

    /// Whether callers are expected to route the candidate to a human
    /// review workflow. Advisory; the engine never enforces it.
    pub fn needs_review(&self) -> bool {
        matches!(self, MatchTier::Uncertain)
    }
}

/// A classified duplicate: the matched corpus entity plus why it matched.
///
/// Borrows the entity from the corpus slice the caller passed in, so the
/// result is valid for as long as that slice is. Serializable for handing
/// to review queues or logs; deserialization is deliberately absent since
/// there is nothing for a standalone value to borrow from.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DuplicateMatch<'a> {
    /// The corpus entity the candidate matched, attributes and all.
    pub entity: &'a ExistingEntity,
    /// Confidence tier of the match.
    pub tier: MatchTier,
    /// Human-readable explanation, deterministic given the inputs.
    pub reason: String,
    /// Similarity score when the match came from fuzzy name comparison;
    /// `None` for exact-field matches.
    pub similarity: Option<f32>,
}

/// Thresholds for the fuzzy name rules.
///
/// The defaults reproduce the production cutoffs (85 high, 60 uncertain).
/// `MatchConfig` is cheap to clone and serde-friendly so it can be embedded
/// in higher-level request types; a `{}` payload deserializes to the
/// defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// Minimum similarity for a `High` fuzzy name match.
    #[serde(default = "MatchConfig::default_high_threshold")]
    pub high_threshold: f32,
    /// Minimum similarity for an `Uncertain` fuzzy name match.
    #[serde(default = "MatchConfig::default_uncertain_threshold")]
    pub uncertain_threshold: f32,
}

impl MatchConfig {
    pub(crate) fn default_high_threshold() -> f32 {
        85.0
    }

    pub(crate) fn default_uncertain_threshold() -> f32 {
        60.0
    }

    /// Validate threshold ranges and ordering.
    pub fn validate(&self) -> Result<(), MatchError> {
        if !(0.0..=100.0).contains(&self.high_threshold) {
            return Err(MatchError::InvalidConfig(
                "high_threshold must be within [0, 100]".into(),
            ));
        }
        if !(0.0..=100.0).contains(&self.uncertain_threshold) {
            return Err(MatchError::InvalidConfig(
                "uncertain_threshold must be within [0, 100]".into(),
            ));
        }
        if self.uncertain_threshold > self.high_threshold {
            return Err(MatchError::InvalidConfig(
                "uncertain_threshold must not exceed high_threshold".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            high_threshold: Self::default_high_threshold(),
            uncertain_threshold: Self::default_uncertain_threshold(),
        }
    }
}


/// Errors produced by the resolution engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Candidate record failed validation.
    #[error("invalid candidate record: {0}")]
    InvalidCandidate(#[from] RecordError),
    /// Threshold configuration rejected by [`MatchConfig::validate`].
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
}
