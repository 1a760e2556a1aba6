//! Word normalization for the loose matching mode
//!
//! Loose matching compares normalized word forms: lowercased, punctuation
//! stripped to spaces, whitespace collapsed. Normalization is only ever used
//! for membership checks; the candidate text itself is emitted verbatim.

use std::collections::HashSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalizes text into space-separated lowercase word forms.
///
/// Accent folding is off by default; enable it when the reference comes from
/// OCR that mangles diacritics.
#[derive(Debug, Clone, Default)]
pub struct WordNormalizer {
    fold_accents: bool,
}

impl WordNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable accent folding (NFD decomposition with combining
    /// marks dropped) ahead of the other normalization steps
    pub fn with_accent_folding(mut self, fold: bool) -> Self {
        self.fold_accents = fold;
        self
    }

    /// Normalize text: lowercase, non-alphanumeric characters become single
    /// spaces, whitespace runs collapse to one space, leading/trailing
    /// whitespace is trimmed.
    pub fn normalize(&self, text: &str) -> String {
        if self.fold_accents {
            let folded: String = text.nfd().filter(|ch| !is_combining_mark(*ch)).collect();
            fold_to_words(&folded)
        } else {
            fold_to_words(text)
        }
    }

    /// Build the set of normalized words occurring in `text`
    pub fn word_set(&self, text: &str) -> HashSet<String> {
        self.normalize(text)
            .split_whitespace()
            .map(str::to_owned)
            .collect()
    }
}

fn fold_to_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for ch in text.chars() {
        if ch.is_alphanumeric() {
            for lower in ch.to_lowercase() {
                out.push(lower);
            }
        } else if !out.is_empty() && !out.ends_with(' ') {
            out.push(' ');
        }
    }

    if out.ends_with(' ') {
        out.pop();
    }

    out
}
