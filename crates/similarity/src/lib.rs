//! Name-similarity metric for entity duplicate resolution.
//!
//! This crate computes how close two strings are as sequences of characters,
//! as a score in `[0.0, 100.0]`. The matcher uses it to decide whether two
//! differently-spelled names plausibly refer to the same entity.
//!
//! ## What we do
//!
//! - Normalize both inputs by trimming and lowercasing, nothing else.
//!   Internal whitespace and punctuation are part of what the metric
//!   measures, so they stay.
//! - Compute the Levenshtein edit distance between the normalized strings,
//!   over characters rather than bytes.
//! - Scale the distance into a percentage of the longer string's length.
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no OS/locale dependence. Same inputs, same score,
//! on any machine. This is what lets the matcher promise deterministic
//! classification.
//!
//! ## Invariants worth knowing
//!
//! - `similarity(s, s)` is exactly `100.0` for any non-empty `s`.
//! - `similarity(a, b) == similarity(b, a)` for all inputs.
//! - Two strings that are both empty after normalization score `0.0`, not
//!   a division-by-zero fault.

/// Levenshtein edit distance between two strings, over characters.
///
/// The minimum number of single-character insertions, deletions, or
/// substitutions needed to transform `a` into `b`. No normalization is
/// applied; callers that want case/trim insensitivity should use
/// [`similarity`] instead.
///
/// Uses the rolling two-row form of the standard dynamic-programming
/// recurrence, so memory is O(len(b)) while time stays
/// O(len(a) × len(b)).
///
/// ```rust
/// use similarity::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("same", "same"), 0);
/// assert_eq!(levenshtein("", "abc"), 3);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let b_len = b_chars.len();

    // prev holds the DP row for the a-prefix processed so far; the seed row
    // is the cost of building each b-prefix from the empty string. When a
    // or b is empty the loop structure degenerates to the right answer
    // without special cases.
    let mut prev: Vec<usize> = (0..=b_len).collect();
    let mut curr: Vec<usize> = vec![0; b_len + 1];

    for (i, a_ch) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &b_ch) in b_chars.iter().enumerate() {
            let cost = usize::from(a_ch != b_ch);
            curr[j + 1] = (prev[j + 1] + 1)
                .min(curr[j] + 1)
                .min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_len]
}

/// Normalized similarity between two strings, in `[0.0, 100.0]`.
///
/// Both inputs are trimmed and lowercased first; internal whitespace is
/// preserved. Identical normalized strings score exactly `100.0`. Two
/// strings that are both empty after normalization score `0.0`. Otherwise
/// the score is
///
/// ```text
/// (max_len - levenshtein(a, b)) / max_len * 100
/// ```
///
/// with lengths measured in characters of the normalized strings.
///
/// ```rust
/// use similarity::similarity;
///
/// assert_eq!(similarity("John Smith", "  john smith "), 100.0);
/// assert_eq!(similarity("John Smith", "John Smyth"), 90.0);
/// assert_eq!(similarity("", "   "), 0.0);
/// ```
pub fn similarity(a: &str, b: &str) -> f32 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    if a == b {
        // Both-empty scores 0.0, not 100.0; the formula below needs
        // max_len > 0.
        return if a.is_empty() { 0.0 } else { 100.0 };
    }

    let max_len = a.chars().count().max(b.chars().count());
    let distance = levenshtein(&a, &b);
    (max_len - distance) as f32 / max_len as f32 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_classic_cases() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("gumbo", "gambol"), 2);
        assert_eq!(levenshtein("book", "back"), 2);
    }

    #[test]
    fn distance_empty_and_identical() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("same", "same"), 0);
    }

    #[test]
    fn distance_counts_characters_not_bytes() {
        assert_eq!(levenshtein("café", "cafe"), 1);
        assert_eq!(levenshtein("øre", "ore"), 1);
        assert_eq!(levenshtein("日本", "日本語"), 1);
    }

    #[test]
    fn distance_is_case_sensitive() {
        assert_eq!(levenshtein("John", "john"), 1);
    }

    #[test]
    fn identity_scores_one_hundred() {
        for s in ["John Smith", "a", "Acme Realty Ltd."] {
            assert_eq!(similarity(s, s), 100.0);
        }
    }

    #[test]
    fn identity_up_to_case_and_trim() {
        assert_eq!(similarity("John Smith", "john smith"), 100.0);
        assert_eq!(similarity("  John Smith  ", "John Smith"), 100.0);
        assert_eq!(similarity("\tJOHN SMITH\n", " john smith "), 100.0);
    }

    #[test]
    fn symmetry() {
        let pairs = [
            ("Jon Smyth", "John Smith"),
            ("Acme Realty", "Acme Realty Ltd"),
            ("", "nonempty"),
            ("kitten", "sitting"),
        ];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a));
        }
    }

    #[test]
    fn bounds_hold_for_unrelated_strings() {
        let pairs = [
            ("John Smith", "Rangi Parata"),
            ("a", "zzzzzzzzzz"),
            ("", ""),
            ("x", ""),
        ];
        for (a, b) in pairs {
            let score = similarity(a, b);
            assert!((0.0..=100.0).contains(&score), "score {score} for {a:?} vs {b:?}");
        }
    }

    #[test]
    fn single_substitution_of_equal_length() {
        // One substitution in a length-n string scores (n-1)/n * 100.
        assert_eq!(similarity("cat", "bat"), 2.0 / 3.0 * 100.0);
        assert_eq!(similarity("John Smith", "John Smyth"), 90.0);
        assert_eq!(similarity("ab", "ax"), 50.0);
    }

    #[test]
    fn both_empty_scores_zero() {
        assert_eq!(similarity("", ""), 0.0);
        assert_eq!(similarity("   ", "\t\n"), 0.0);
    }

    #[test]
    fn one_empty_scores_zero() {
        assert_eq!(similarity("", "John Smith"), 0.0);
        assert_eq!(similarity("John Smith", "   "), 0.0);
    }

    #[test]
    fn internal_whitespace_is_signal() {
        // "john  smith" (11 chars) vs "john smith" (10 chars): one deletion.
        assert_eq!(similarity("John  Smith", "John Smith"), 10.0 / 11.0 * 100.0);
    }

    #[test]
    fn near_miss_name_pair() {
        // "jon smyth" (9) vs "john smith" (10): insert one char, substitute
        // one char, so distance 2 over max length 10.
        let score = similarity("Jon Smyth", "John Smith");
        assert_eq!(score, 80.0);
    }

    #[test]
    fn deterministic_across_calls() {
        let first = similarity("Jon Smyth", "John Smith");
        for _ in 0..10 {
            assert_eq!(similarity("Jon Smyth", "John Smith"), first);
        }
    }
}
