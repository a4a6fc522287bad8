//! # Entity Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` sits on top of the record layer (`record`) and the similarity
//! metric (`similarity`). It classifies a candidate record against a corpus
//! of existing entities: exact-field rules first (name+company, phone,
//! email), then fuzzy name comparison against configurable thresholds, and
//! finally severity-based selection of the single best match.
//!
//! In a typical deployment you will:
//! - Fetch the entity corpus from your record store as a slice of
//!   [`record::ExistingEntity`] values.
//! - Call [`find_duplicate`] with the inbound candidate before creating it
//!   as a new entity, and act on the returned tier.
//!
//! ## Core Types
//!
//! - [`MatchTier`]: confidence tier of a match (`Exact`, `High`,
//!   `Uncertain`), ordered by severity, with advisory disposition helpers.
//! - [`MatchConfig`]: the fuzzy-name thresholds; defaults are 85 (high)
//!   and 60 (uncertain).
//! - [`DuplicateMatch`]: the matched entity (borrowed from the corpus),
//!   the tier, the human-readable reason, and the fuzzy score when one was
//!   involved.
//! - [`MatchError`]: invalid candidate or invalid configuration; the
//!   engine has no other failure modes.
//!
//! ## Example Usage
//!
//! ```rust
//! use matcher::{MatchTier, find_duplicate};
//! use record::{CandidateRecord, ExistingEntity};
//!
//! let candidate = CandidateRecord::new("John Smith").with_company_name("Acme Realty");
//! let corpus = vec![ExistingEntity {
//!     id: "ent-1".into(),
//!     name: Some("John Smith".into()),
//!     company: Some("Acme Realty".into()),
//!     phone: None,
//!     email: None,
//!     attributes: None,
//! }];
//!
//! let found = find_duplicate(&candidate, &corpus)
//!     .expect("candidate is valid")
//!     .expect("duplicate expected");
//! assert_eq!(found.tier, MatchTier::Exact);
//! assert_eq!(found.reason, "Same name and company");
//! assert!(found.tier.blocks_creation());
//! ```
//!
//! ## Observability
//!
//! Install a [`ResolutionMetrics`] implementation via
//! [`set_resolution_metrics`] to record per-call corpus size, latency, and
//! outcome. This is typically done once during service startup. The engine
//! also emits `tracing` events under the `matcher.find_duplicate` span; no
//! subscriber is installed here.

pub mod engine;
pub mod metrics;
pub mod types;

pub use crate::engine::{find_duplicate, find_duplicate_with_config};
pub use crate::metrics::{ResolutionMetrics, set_resolution_metrics};
pub use crate::types::{DuplicateMatch, MatchConfig, MatchError, MatchTier};
