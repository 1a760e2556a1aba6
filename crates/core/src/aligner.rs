//! Aligner implementations
//!
//! Two ways of deciding which candidate spans are shared with the reference:
//!
//! - [`ExactAligner`] diffs the two texts character by character and
//!   highlights the surviving equal runs. High precision; reordered or
//!   reworded copy falls out of the match.
//! - [`WordAligner`] ignores word order, casing, and punctuation, matching
//!   any candidate word that occurs anywhere in the reference. Higher recall,
//!   lower precision.
//!
//! Both reconstruct the candidate exactly and never fail; an empty reference
//! or candidate short-circuits to a single unmatched segment.

use crate::algorithm::{myers, EditKind};
use crate::cleanup::semantic_cleanup;
use crate::config::DEFAULT_MIN_MATCH_RUN;
use crate::normalize::WordNormalizer;
use crate::segment::{merge_adjacent, Segment};
use crate::tokenize::split_pieces;

/// Strategy for classifying candidate spans as shared or unique.
///
/// Implementations must uphold the reconstruction invariant: concatenating
/// the returned segment texts yields `candidate` exactly, for every input
/// pair.
pub trait Aligner: Send + Sync {
    /// Align `candidate` against `reference`, returning the segment sequence
    fn align(&self, reference: &str, candidate: &str) -> Vec<Segment>;

    /// Name of this aligner
    fn name(&self) -> &str;
}

/// When either input is empty there is nothing to compare: the whole
/// candidate (possibly empty) passes through as a single unmatched segment.
fn whole_candidate_fallback(candidate: &str) -> Vec<Segment> {
    vec![Segment::unmatched(candidate)]
}

/// Character-level diff alignment.
///
/// Equal runs of the cleaned edit script become matched segments; candidate-
/// only runs stay unmatched; reference-only runs contribute no output. A
/// matched run must contain at least one non-whitespace character, so
/// spacing and newlines are never highlighted even when literally shared.
#[derive(Debug, Clone)]
pub struct ExactAligner {
    min_match_run: usize,
}

impl ExactAligner {
    pub fn new() -> Self {
        Self {
            min_match_run: DEFAULT_MIN_MATCH_RUN,
        }
    }

    /// Set the minimum non-whitespace length for an equal run to survive
    /// cleanup as a standalone match
    pub fn with_min_match_run(mut self, min_match_run: usize) -> Self {
        self.min_match_run = min_match_run;
        self
    }
}

impl Default for ExactAligner {
    fn default() -> Self {
        Self::new()
    }
}

impl Aligner for ExactAligner {
    fn align(&self, reference: &str, candidate: &str) -> Vec<Segment> {
        if reference.is_empty() || candidate.is_empty() {
            return whole_candidate_fallback(candidate);
        }

        let runs = myers::diff(reference, candidate);
        let runs = semantic_cleanup(runs, self.min_match_run);

        let segments = runs.into_iter().filter_map(|run| match run.kind {
            EditKind::Delete => None,
            EditKind::Insert => Some(Segment::unmatched(run.text)),
            EditKind::Equal => {
                if run.content_chars() > 0 {
                    Some(Segment::matched(run.text))
                } else {
                    Some(Segment::unmatched(run.text))
                }
            }
        });

        merge_adjacent(segments.collect())
    }

    fn name(&self) -> &str {
        "exact"
    }
}

/// Normalized word-set alignment.
///
/// Every candidate word whose normalized form occurs anywhere in the
/// reference is matched, regardless of order. Whitespace and words that
/// normalize to nothing pass through unmatched.
#[derive(Debug, Clone, Default)]
pub struct WordAligner {
    normalizer: WordNormalizer,
}

impl WordAligner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable accent folding during normalization
    pub fn with_accent_folding(mut self, fold: bool) -> Self {
        self.normalizer = self.normalizer.with_accent_folding(fold);
        self
    }
}

impl Aligner for WordAligner {
    fn align(&self, reference: &str, candidate: &str) -> Vec<Segment> {
        if reference.is_empty() || candidate.is_empty() {
            return whole_candidate_fallback(candidate);
        }

        let words = self.normalizer.word_set(reference);

        let segments = split_pieces(candidate).into_iter().map(|piece| {
            if piece.is_whitespace {
                return Segment::unmatched(piece.text);
            }

            let normalized = self.normalizer.normalize(piece.text);
            if !normalized.is_empty() && words.contains(&normalized) {
                Segment::matched(piece.text)
            } else {
                Segment::unmatched(piece.text)
            }
        });

        merge_adjacent(segments.collect())
    }

    fn name(&self) -> &str {
        "word"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconstructed(segments: &[Segment]) -> String {
        segments.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_empty_reference_single_unmatched_segment() {
        let segments = ExactAligner::new().align("", "hello world");
        assert_eq!(segments, vec![Segment::unmatched("hello world")]);
    }

    #[test]
    fn test_empty_candidate_single_empty_segment() {
        let segments = ExactAligner::new().align("hello", "");
        assert_eq!(segments, vec![Segment::unmatched("")]);
    }

    #[test]
    fn test_full_match_is_highlighted() {
        let segments = ExactAligner::new().align("Save 50% today", "Save 50% today");
        assert_eq!(segments, vec![Segment::matched("Save 50% today")]);
    }

    #[test]
    fn test_disjoint_texts_have_no_highlight() {
        let segments = ExactAligner::new().align("apples", "oranges");
        assert_eq!(segments, vec![Segment::unmatched("oranges")]);
    }

    #[test]
    fn test_shared_prefix_highlighted_remainder_not() {
        let segments = ExactAligner::new().align("Buy one get one free", "Buy one get nothing");

        assert!(segments[0].is_match);
        assert!(segments[0].text.starts_with("Buy one get"));
        assert!(segments.iter().any(|s| !s.is_match));
        assert_eq!(reconstructed(&segments), "Buy one get nothing");
    }

    #[test]
    fn test_shared_whitespace_is_not_highlighted() {
        let segments = ExactAligner::new().align("one\n\ntwo", "three\n\nfour");
        assert!(segments.iter().all(|s| !s.is_match));
        assert_eq!(reconstructed(&segments), "three\n\nfour");
    }

    #[test]
    fn test_exact_mode_on_reordered_words() {
        let segments = ExactAligner::new().align(
            "Save 50% on premium services",
            "Save 50% on services premium",
        );

        assert!(segments[0].is_match);
        assert!(segments[0].text.starts_with("Save 50% on"));
        assert!(segments.iter().any(|s| !s.is_match));
        assert_eq!(reconstructed(&segments), "Save 50% on services premium");
    }

    #[test]
    fn test_word_mode_ignores_reordering() {
        let segments = WordAligner::new().align(
            "Save 50% on premium services",
            "Save 50% on services premium",
        );

        assert!(segments
            .iter()
            .all(|s| s.is_match || s.text.chars().all(char::is_whitespace)));
        assert_eq!(reconstructed(&segments), "Save 50% on services premium");
    }

    #[test]
    fn test_word_mode_ignores_case_and_punctuation() {
        let segments = WordAligner::new().align("save 50% TODAY", "Today: save, 50%!");

        for segment in &segments {
            if segment.text.chars().any(char::is_alphanumeric) {
                assert!(segment.is_match, "expected match: {:?}", segment.text);
            }
        }
        assert_eq!(reconstructed(&segments), "Today: save, 50%!");
    }

    #[test]
    fn test_word_mode_unknown_words_unmatched() {
        let segments = WordAligner::new().align("Save 50% today", "Spend 50% tomorrow");

        let unmatched: String = segments
            .iter()
            .filter(|s| !s.is_match)
            .map(|s| s.text.as_str())
            .collect();
        assert!(unmatched.contains("Spend"));
        assert!(unmatched.contains("tomorrow"));
        assert!(segments.iter().any(|s| s.is_match && s.text == "50%"));
    }

    #[test]
    fn test_word_mode_accent_folding() {
        let plain = WordAligner::new();
        let folding = WordAligner::new().with_accent_folding(true);

        assert!(plain
            .align("cafe creme", "café crème")
            .iter()
            .all(|s| !s.is_match));
        assert!(folding
            .align("cafe creme", "café crème")
            .iter()
            .any(|s| s.is_match));
    }

    #[test]
    fn test_aligners_are_pure() {
        let exact = ExactAligner::new();
        let first = exact.align("Save 50% today", "Save big today");
        let second = exact.align("Save 50% today", "Save big today");
        assert_eq!(first, second);
    }
}
