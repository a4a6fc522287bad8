use std::time::Instant;

use record::{CandidateRecord, ExistingEntity, normalize_phone, normalize_text};
use similarity::similarity;
use tracing::{Level, debug, info, warn};

use crate::metrics::metrics_recorder;
use crate::types::{DuplicateMatch, MatchConfig, MatchError, MatchTier};


/// Find the single most severe duplicate of `candidate` in `corpus`, using
/// the default thresholds.
///
/// See [`find_duplicate_with_config`] for the full contract.
pub fn find_duplicate<'a>(
    candidate: &CandidateRecord,
    corpus: &'a [ExistingEntity],
) -> Result<Option<DuplicateMatch<'a>>, MatchError> {
    find_duplicate_with_config(candidate, corpus, &MatchConfig::default())
}

/// Find the single most severe duplicate of `candidate` in `corpus`.
///
/// Every corpus entity is evaluated against the comparison rules in
/// priority order (exact name+company, exact phone, exact email, then the
/// fuzzy name thresholds); the first rule to fire decides that entity's
/// match. The scan always visits the whole corpus, then the single most
/// severe match is returned. Among matches of equal severity the earliest
/// entity in corpus order wins, never the highest-scoring one; callers that
/// need every plausible duplicate must not treat this as an enumeration
/// API.
///
/// Returns `Ok(None)` for an empty corpus or when nothing matched;
/// `Err(MatchError::InvalidCandidate)` when the candidate's `full_name` is
/// blank, and `Err(MatchError::InvalidConfig)` when the thresholds are
/// invalid. Neither input is mutated, and identical inputs always produce
/// the identical result.
pub fn find_duplicate_with_config<'a>(
    candidate: &CandidateRecord,
    corpus: &'a [ExistingEntity],
    cfg: &MatchConfig,
) -> Result<Option<DuplicateMatch<'a>>, MatchError> {
    let span = tracing::span!(
        Level::INFO,
        "matcher.find_duplicate",
        corpus_len = corpus.len()
    );
    let _guard = span.enter();

    if let Err(err) = candidate.validate() {
        let err = MatchError::from(err);
        warn!(error = %err, "resolution_rejected");
        return Err(err);
    }
    if let Err(err) = cfg.validate() {
        warn!(error = %err, "resolution_rejected");
        return Err(err);
    }

    let start = Instant::now();
    let mut best: Option<DuplicateMatch<'a>> = None;

    for entity in corpus {
        let Some(found) = evaluate_entity(candidate, entity, cfg) else {
            continue;
        };
        debug!(
            entity_id = %found.entity.id,
            tier = ?found.tier,
            reason = %found.reason,
            "rule_hit"
        );
        // Strictly-greater severity keeps the earliest entity on ties. The
        // scan never breaks early: a later entity can still carry a more
        // severe match.
        let replace = match &best {
            Some(current) => found.tier.severity() > current.tier.severity(),
            None => true,
        };
        if replace {
            best = Some(found);
        }
    }

    let latency = start.elapsed();
    if let Some(recorder) = metrics_recorder() {
        recorder.record_resolution(corpus.len(), latency, best.as_ref().map(|m| m.tier));
    }

    match &best {
        Some(found) => info!(
            entity_id = %found.entity.id,
            tier = ?found.tier,
            elapsed_micros = latency.as_micros(),
            "resolution_match"
        ),
        None => info!(
            elapsed_micros = latency.as_micros(),
            "resolution_no_match"
        ),
    }

    Ok(best)
}

/// Apply the comparison rules to one entity, in priority order. The first
/// rule that fires decides this entity's match; later rules are not
/// consulted for it.
fn evaluate_entity<'a>(
    candidate: &CandidateRecord,
    entity: &'a ExistingEntity,
    cfg: &MatchConfig,
) -> Option<DuplicateMatch<'a>> {
    let candidate_name = normalize_text(&candidate.full_name);

    // Rule 1: exact name and company. Requires a name on the entity and a
    // company on both sides.
    if let (Some(candidate_company), Some(entity_name), Some(entity_company)) =
        (&candidate.company_name, &entity.name, &entity.company)
        && candidate_name == normalize_text(entity_name)
        && normalize_text(candidate_company) == normalize_text(entity_company)
    {
        return Some(DuplicateMatch {
            entity,
            tier: MatchTier::Exact,
            reason: "Same name and company".into(),
            similarity: None,
        });
    }

    // Rule 2: exact phone. Whitespace-insensitive only; punctuation such as
    // `+`, `-`, and parentheses stays part of the compared value.
    if let (Some(candidate_phone), Some(entity_phone)) = (&candidate.phone, &entity.phone)
        && normalize_phone(candidate_phone) == normalize_phone(entity_phone)
    {
        return Some(DuplicateMatch {
            entity,
            tier: MatchTier::Exact,
            reason: "Same phone number".into(),
            similarity: None,
        });
    }

    // Rule 3: exact email, case- and trim-insensitive.
    if let (Some(candidate_email), Some(entity_email)) = (&candidate.email, &entity.email)
        && normalize_text(candidate_email) == normalize_text(entity_email)
    {
        return Some(DuplicateMatch {
            entity,
            tier: MatchTier::Exact,
            reason: "Same email address".into(),
            similarity: None,
        });
    }

    // Rules 4 and 5: fuzzy name, one score shared by both thresholds. A
    // missing entity name compares as the empty string and scores 0, so it
    // can never cross either threshold.
    let score = similarity(&candidate.full_name, entity.name.as_deref().unwrap_or(""));
    if score >= cfg.high_threshold {
        let pct = score.round();
        return Some(DuplicateMatch {
            entity,
            tier: MatchTier::High,
            reason: format!("Very similar name ({pct:.0}% match)"),
            similarity: Some(score),
        });
    }
    if score >= cfg.uncertain_threshold {
        let pct = score.round();
        return Some(DuplicateMatch {
            entity,
            tier: MatchTier::Uncertain,
            reason: format!("Possibly similar name ({pct:.0}% match)"),
            similarity: Some(score),
        });
    }

    None
}
