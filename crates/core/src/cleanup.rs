//! Semantic cleanup of raw edit scripts
//!
//! A character-level diff of prose tends to find short equal runs inside
//! otherwise-unrelated words (a stray "es" or single letters around
//! punctuation). Highlighting those produces confetti. This pass folds weak
//! equal runs into the surrounding changes so highlights follow word-sized
//! shared spans.

use crate::algorithm::{coalesce_runs, EditKind, EditRun};

/// Fold weak equal runs into the neighboring delete/insert runs.
///
/// An equal run is weak when it holds fewer than `min_match_run`
/// non-whitespace characters. Folding replaces it with a delete and an insert
/// of the same text, which the following coalesce absorbs into the
/// surrounding changes; the text still appears on both sides of the script,
/// so reconstruction of either input is unaffected.
///
/// A script consisting of a single equal run is never folded: the texts are
/// identical and there is no neighboring change to fold into. Thresholds of 0
/// or 1 disable folding entirely.
pub fn semantic_cleanup(runs: Vec<EditRun>, min_match_run: usize) -> Vec<EditRun> {
    let runs = coalesce_runs(runs);

    if min_match_run <= 1 || runs.len() < 2 {
        return runs;
    }

    let mut folded = Vec::with_capacity(runs.len());
    for run in runs {
        if run.kind == EditKind::Equal && run.content_chars() < min_match_run {
            folded.push(EditRun::new(EditKind::Delete, run.text.clone()));
            folded.push(EditRun::new(EditKind::Insert, run.text));
        } else {
            folded.push(run);
        }
    }

    coalesce_runs(folded)
}
