//! Alignment result types and structures

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contiguous span of the candidate text, tagged as shared or unique.
///
/// Concatenating the `text` fields of all segments in an [`Alignment`], in
/// order, reproduces the candidate string exactly. Renderers must preserve
/// both the order and the text content or the displayed output silently
/// diverges from the true input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    /// Verbatim substring of the candidate text
    pub text: String,

    /// Whether this span also occurs in the reference text
    pub is_match: bool,
}

impl Segment {
    /// Create a segment marked as shared with the reference
    pub fn matched(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_match: true,
        }
    }

    /// Create a segment unique to the candidate
    pub fn unmatched(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_match: false,
        }
    }

    /// Number of characters in this segment
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Number of non-whitespace characters in this segment
    pub fn content_chars(&self) -> usize {
        self.text.chars().filter(|ch| !ch.is_whitespace()).count()
    }

    /// Whether the segment contains no non-whitespace characters
    pub fn is_whitespace_only(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }
}

/// Summary statistics for an alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlignmentStats {
    /// Total characters in the candidate text
    pub candidate_chars: usize,

    /// Non-whitespace characters in the candidate text
    pub content_chars: usize,

    /// Non-whitespace characters inside matched segments
    pub matched_chars: usize,
}

/// Complete alignment result: the segment sequence plus summary statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alignment {
    segments: Vec<Segment>,
    stats: AlignmentStats,
}

impl Alignment {
    /// Build an alignment from a segment sequence, computing statistics
    pub fn new(segments: Vec<Segment>) -> Self {
        let mut stats = AlignmentStats::default();

        for segment in &segments {
            let content = segment.content_chars();
            stats.candidate_chars += segment.char_count();
            stats.content_chars += content;
            if segment.is_match {
                stats.matched_chars += content;
            }
        }

        Self { segments, stats }
    }

    /// The segment sequence, in candidate order
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Consume the alignment, returning the segment sequence
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    /// Summary statistics
    pub fn stats(&self) -> AlignmentStats {
        self.stats
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterate over the segments in order
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// Reconstruct the candidate text by concatenating all segments.
    ///
    /// Always equals the candidate string the alignment was computed from.
    pub fn candidate_text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }

    /// Fraction of non-whitespace candidate characters that are matched.
    ///
    /// Whitespace never matches, so the denominator excludes it; a candidate
    /// fully shared with the reference reports 1.0. Returns 0.0 when the
    /// candidate has no non-whitespace content.
    pub fn match_fraction(&self) -> f64 {
        if self.stats.content_chars == 0 {
            0.0
        } else {
            self.stats.matched_chars as f64 / self.stats.content_chars as f64
        }
    }

    /// Whether every non-whitespace character of the candidate is matched
    pub fn is_fully_matched(&self) -> bool {
        self.stats.content_chars > 0 && self.stats.matched_chars == self.stats.content_chars
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} segments, {}/{} content chars matched ({:.1}%)",
            self.segments.len(),
            self.stats.matched_chars,
            self.stats.content_chars,
            self.match_fraction() * 100.0
        )
    }
}

impl<'a> IntoIterator for &'a Alignment {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Merge adjacent segments that share a match flag and drop empty segments.
///
/// Keeps the segment sequence minimal without changing the reconstructed
/// text.
pub(crate) fn merge_adjacent(segments: Vec<Segment>) -> Vec<Segment> {
    segments
        .into_iter()
        .filter(|segment| !segment.text.is_empty())
        .coalesce(|mut left, right| {
            if left.is_match == right.is_match {
                left.text.push_str(&right.text);
                Ok(left)
            } else {
                Err((left, right))
            }
        })
        .collect()
}
