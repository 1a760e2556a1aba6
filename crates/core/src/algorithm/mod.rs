//! Edit-script model shared by the diff algorithm and the cleanup pass
//!
//! A diff between two texts is expressed as an ordered list of runs, each
//! holding a maximal span of one edit kind.

pub mod myers;

use itertools::Itertools;

/// Kind of edit run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditKind {
    /// Present in both texts at this aligned position
    Equal,
    /// Present only in the reference text
    Delete,
    /// Present only in the candidate text
    Insert,
}

/// A maximal span of one edit kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRun {
    /// Kind of this run
    pub kind: EditKind,

    /// Verbatim text of the run
    pub text: String,
}

impl EditRun {
    pub fn new(kind: EditKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Number of characters in this run
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Number of non-whitespace characters in this run
    pub fn content_chars(&self) -> usize {
        self.text.chars().filter(|ch| !ch.is_whitespace()).count()
    }
}

/// Merge adjacent runs of the same kind and drop empty runs.
///
/// The run list stays equivalent: reading the equal+delete runs still yields
/// the reference text and the equal+insert runs the candidate text.
pub fn coalesce_runs(runs: Vec<EditRun>) -> Vec<EditRun> {
    runs.into_iter()
        .filter(|run| !run.text.is_empty())
        .coalesce(|mut left, right| {
            if left.kind == right.kind {
                left.text.push_str(&right.text);
                Ok(left)
            } else {
                Err((left, right))
            }
        })
        .collect()
}
