//! Alignment engine orchestrating mode dispatch and input bounding

use log::{debug, trace};

use crate::aligner::{Aligner, ExactAligner, WordAligner};
use crate::config::{AlignConfig, AlignMode};
use crate::segment::{merge_adjacent, Alignment, Segment};

/// The alignment engine.
///
/// A pure, synchronous computation: no I/O, no shared state, no failure
/// modes. Every input pair, including empty or whitespace-only strings,
/// produces an alignment whose segments reconstruct the candidate exactly.
pub struct AlignEngine {
    config: AlignConfig,
}

impl AlignEngine {
    /// Create an engine with the given configuration
    pub fn new(config: AlignConfig) -> Self {
        Self { config }
    }

    /// Create an engine with the default configuration (exact mode)
    pub fn with_defaults() -> Self {
        Self::new(AlignConfig::default())
    }

    /// The engine's configuration
    pub fn config(&self) -> &AlignConfig {
        &self.config
    }

    /// Align `candidate` against `reference`.
    ///
    /// If either input is empty the whole candidate passes through as a
    /// single unmatched segment. Otherwise both inputs are bounded per the
    /// configuration and handed to the configured aligner; a truncated
    /// candidate tail is re-emitted verbatim as an unmatched segment.
    pub fn align(&self, reference: &str, candidate: &str) -> Alignment {
        if reference.is_empty() || candidate.is_empty() {
            return Alignment::new(vec![Segment::unmatched(candidate)]);
        }

        let (reference_head, reference_tail) = bound_chars(reference, self.config.max_input_chars);
        let (candidate_head, candidate_tail) = bound_chars(candidate, self.config.max_input_chars);

        if !reference_tail.is_empty() || !candidate_tail.is_empty() {
            debug!(
                "input bounded to {} chars (reference cut {}, candidate cut {} bytes)",
                self.config.max_input_chars.unwrap_or_default(),
                reference_tail.len(),
                candidate_tail.len(),
            );
        }

        let mut segments = match self.config.mode {
            AlignMode::Exact => ExactAligner::new()
                .with_min_match_run(self.config.min_match_run)
                .align(reference_head, candidate_head),
            AlignMode::Word => WordAligner::new()
                .with_accent_folding(self.config.fold_accents)
                .align(reference_head, candidate_head),
        };

        if !candidate_tail.is_empty() {
            segments.push(Segment::unmatched(candidate_tail));
            segments = merge_adjacent(segments);
        }

        trace!("aligned into {} segments", segments.len());

        Alignment::new(segments)
    }
}

impl Default for AlignEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Split `text` after at most `limit` characters, on a char boundary
fn bound_chars(text: &str, limit: Option<usize>) -> (&str, &str) {
    match limit {
        Some(limit) => match text.char_indices().nth(limit) {
            Some((idx, _)) => text.split_at(idx),
            None => (text, ""),
        },
        None => (text, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_mode_dispatch() {
        let reference = "Save 50% on premium services";
        let candidate = "Save 50% on services premium";

        let exact = AlignEngine::new(AlignConfig::exact()).align(reference, candidate);
        let loose = AlignEngine::new(AlignConfig::loose()).align(reference, candidate);

        assert!(exact.segments().iter().any(|s| !s.is_match));
        assert!(loose.is_fully_matched());
        assert_eq!(exact.candidate_text(), candidate);
        assert_eq!(loose.candidate_text(), candidate);
    }

    #[test]
    fn test_empty_inputs_fall_back() {
        let engine = AlignEngine::with_defaults();

        let alignment = engine.align("", "hello world");
        assert_eq!(alignment.segments(), &[Segment::unmatched("hello world")]);

        let alignment = engine.align("hello", "");
        assert_eq!(alignment.segments(), &[Segment::unmatched("")]);
    }

    #[test]
    fn test_truncated_tail_is_unmatched_and_preserved() {
        let engine = AlignEngine::new(AlignConfig::exact().with_max_input_chars(10));
        let reference = "Save 50% today and tomorrow";
        let candidate = "Save 50% today and forever";

        let alignment = engine.align(reference, candidate);

        assert_eq!(alignment.candidate_text(), candidate);
        let last = alignment.segments().last().unwrap();
        assert!(!last.is_match);
        assert!(last.text.ends_with("and forever"));
    }

    #[test]
    fn test_truncation_on_multibyte_boundary() {
        let engine = AlignEngine::new(AlignConfig::exact().with_max_input_chars(3));
        let alignment = engine.align("ééééé", "ééééé");

        assert_eq!(alignment.candidate_text(), "ééééé");
    }

    #[test]
    fn test_zero_bound_degenerates_to_unmatched() {
        let engine = AlignEngine::new(AlignConfig::exact().with_max_input_chars(0));
        let alignment = engine.align("reference", "candidate");

        assert_eq!(alignment.segments(), &[Segment::unmatched("candidate")]);
    }

    #[test]
    fn test_repeated_calls_identical() {
        let engine = AlignEngine::with_defaults();
        let first = engine.align("Save 50% today", "Save more today");
        let second = engine.align("Save 50% today", "Save more today");
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn prop_exact_mode_reconstructs(reference in any::<String>(), candidate in any::<String>()) {
            let alignment = AlignEngine::new(AlignConfig::exact()).align(&reference, &candidate);
            prop_assert_eq!(alignment.candidate_text(), candidate);
        }

        #[test]
        fn prop_word_mode_reconstructs(reference in any::<String>(), candidate in any::<String>()) {
            let alignment = AlignEngine::new(AlignConfig::loose()).align(&reference, &candidate);
            prop_assert_eq!(alignment.candidate_text(), candidate);
        }

        #[test]
        fn prop_bounded_exact_mode_reconstructs(
            reference in any::<String>(),
            candidate in any::<String>(),
            bound in 0usize..32,
        ) {
            let config = AlignConfig::exact().with_max_input_chars(bound);
            let alignment = AlignEngine::new(config).align(&reference, &candidate);
            prop_assert_eq!(alignment.candidate_text(), candidate);
        }

        #[test]
        fn prop_whitespace_never_matches(reference in any::<String>(), candidate in any::<String>()) {
            let alignment = AlignEngine::new(AlignConfig::exact()).align(&reference, &candidate);
            for segment in alignment.segments() {
                if segment.is_match {
                    prop_assert!(segment.content_chars() > 0);
                }
            }
        }
    }
}
