//! # Copymatch Core
//!
//! Text alignment engine for campaign-overlap review: compares freshly
//! extracted document text against a stored campaign body and tags each span
//! of the stored text as shared or unique, ready for highlight rendering.
//!
//! ## Core Concepts
//!
//! - **Segments**: ordered spans of the candidate text with a match flag;
//!   concatenated in order they reproduce the candidate exactly
//! - **Aligners**: exact mode diffs character by character; word mode
//!   matches normalized words regardless of order
//! - **Cleanup**: short equal runs are folded into neighboring changes so
//!   highlights follow word-sized shared spans
//! - **Engine**: applies configuration (mode, cleanup threshold, input
//!   bounds) and always returns a valid alignment
//!
//! ## Example
//!
//! ```rust
//! use copymatch_core::align;
//!
//! let alignment = align("Save 50% today", "Save 50% today only");
//!
//! assert_eq!(alignment.candidate_text(), "Save 50% today only");
//! assert!(alignment.segments()[0].is_match);
//! assert!(!alignment.segments()[1].is_match);
//! ```

pub mod algorithm;
pub mod aligner;
pub mod cleanup;
pub mod config;
pub mod engine;
pub mod normalize;
pub mod segment;
pub mod tokenize;

// Re-export main types
pub use aligner::{Aligner, ExactAligner, WordAligner};
pub use config::{AlignConfig, AlignMode, DEFAULT_MIN_MATCH_RUN};
pub use engine::AlignEngine;
pub use segment::{Alignment, AlignmentStats, Segment};

/// Align `candidate` against `reference` with the exact character-level mode.
///
/// # Arguments
///
/// * `reference` - The text being compared against (e.g., freshly extracted
///   OCR text)
/// * `candidate` - The stored text being evaluated for overlap
///
/// # Returns
///
/// An [`Alignment`] whose segments reconstruct `candidate` exactly
///
/// # Example
///
/// ```rust
/// use copymatch_core::align;
///
/// let alignment = align("Buy one get one free", "Buy one get one free today");
/// assert!(alignment.segments()[0].is_match);
/// ```
pub fn align(reference: &str, candidate: &str) -> Alignment {
    AlignEngine::new(AlignConfig::exact()).align(reference, candidate)
}

/// Align `candidate` against `reference` with the lenient word-level mode.
///
/// Matches any candidate word occurring anywhere in the reference, ignoring
/// order, casing, and punctuation. Trades precision for recall relative to
/// [`align`].
pub fn align_by_words(reference: &str, candidate: &str) -> Alignment {
    AlignEngine::new(AlignConfig::loose()).align(reference, candidate)
}

/// Align with an explicit configuration
pub fn align_with(reference: &str, candidate: &str, config: AlignConfig) -> Alignment {
    AlignEngine::new(config).align(reference, candidate)
}
