//! Myers O(ND) character-level diff
//!
//! Greedy forward pass over the edit graph with a per-round trace for
//! backtracking. Common prefixes and suffixes are trimmed before the D-loop
//! so only the changed middle pays the quadratic worst case; callers with
//! unbounded input should cap it upstream.

use crate::algorithm::{coalesce_runs, EditKind, EditRun};

/// Compute the character-level edit script between two texts.
///
/// # Arguments
///
/// * `reference` - The text deletions are measured against
/// * `candidate` - The text insertions are measured against
///
/// # Returns
///
/// Coalesced edit runs: reading equal+delete runs in order yields
/// `reference`, reading equal+insert runs yields `candidate`.
pub fn diff(reference: &str, candidate: &str) -> Vec<EditRun> {
    let a: Vec<char> = reference.chars().collect();
    let b: Vec<char> = candidate.chars().collect();

    let prefix = common_prefix(&a, &b);
    let suffix = common_suffix(&a[prefix..], &b[prefix..]);

    let mut runs = Vec::new();

    if prefix > 0 {
        runs.push(EditRun::new(
            EditKind::Equal,
            a[..prefix].iter().collect::<String>(),
        ));
    }

    runs.extend(middle_diff(
        &a[prefix..a.len() - suffix],
        &b[prefix..b.len() - suffix],
    ));

    if suffix > 0 {
        runs.push(EditRun::new(
            EditKind::Equal,
            a[a.len() - suffix..].iter().collect::<String>(),
        ));
    }

    coalesce_runs(runs)
}

fn common_prefix(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

fn common_suffix(a: &[char], b: &[char]) -> usize {
    a.iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count()
}

fn middle_diff(a: &[char], b: &[char]) -> Vec<EditRun> {
    if a.is_empty() && b.is_empty() {
        return Vec::new();
    }
    if a.is_empty() {
        return vec![EditRun::new(EditKind::Insert, b.iter().collect::<String>())];
    }
    if b.is_empty() {
        return vec![EditRun::new(EditKind::Delete, a.iter().collect::<String>())];
    }

    let trace = forward_trace(a, b);
    backtrack(a, b, &trace)
}

/// Run the greedy forward pass, snapshotting the furthest-x frontier once per
/// round. The snapshot taken at the start of round `d` holds the round `d-1`
/// frontier, which is exactly what backtracking through round `d` needs.
fn forward_trace(a: &[char], b: &[char]) -> Vec<Vec<isize>> {
    let n = a.len() as isize;
    let m = b.len() as isize;
    let max = n + m;
    let offset = max;

    let mut v = vec![0isize; (2 * max + 1) as usize];
    let mut trace = Vec::new();

    for d in 0..=max {
        trace.push(v.clone());

        let mut k = -d;
        while k <= d {
            let idx = (k + offset) as usize;

            let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                v[idx + 1]
            } else {
                v[idx - 1] + 1
            };
            let mut y = x - k;

            while x < n && y < m && a[x as usize] == b[y as usize] {
                x += 1;
                y += 1;
            }

            v[idx] = x;

            if x >= n && y >= m {
                return trace;
            }

            k += 2;
        }
    }

    // d = n + m always reaches (n, m), so the loop returns before this.
    trace
}

fn backtrack(a: &[char], b: &[char], trace: &[Vec<isize>]) -> Vec<EditRun> {
    let n = a.len() as isize;
    let m = b.len() as isize;
    let offset = n + m;

    let mut edits: Vec<(EditKind, char)> = Vec::new();
    let mut x = n;
    let mut y = m;

    for (d, v) in trace.iter().enumerate().rev() {
        let d = d as isize;
        let k = x - y;
        let idx = (k + offset) as usize;

        let prev_k = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = v[(prev_k + offset) as usize];
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            edits.push((EditKind::Equal, b[(y - 1) as usize]));
            x -= 1;
            y -= 1;
        }

        if d > 0 {
            if x == prev_x {
                edits.push((EditKind::Insert, b[prev_y as usize]));
            } else {
                edits.push((EditKind::Delete, a[prev_x as usize]));
            }
            x = prev_x;
            y = prev_y;
        }
    }

    edits.reverse();

    let mut runs: Vec<EditRun> = Vec::new();
    for (kind, ch) in edits {
        match runs.last_mut() {
            Some(run) if run.kind == kind => run.text.push(ch),
            _ => runs.push(EditRun::new(kind, ch.to_string())),
        }
    }

    runs
}
