//! Trigram-overlap authorship comparison.

use std::collections::HashSet;

use crate::error::ReportError;

/// Result of comparing the target sample against the rest of the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorshipHint {
    /// Display name of the target sample.
    pub target: String,
    /// Display name of the best-matching candidate.
    pub best: String,
    /// Size of the trigram intersection between the two.
    pub shared: usize,
}

/// Picks the candidate sharing the most trigrams with the target.
///
/// `sets` is in corpus order; the entry at `target_index` is the target and
/// is excluded from the candidate pool. On an overlap tie the candidate
/// appearing first in `sets` wins, so the outcome is deterministic.
pub fn best_match(
    sets: &[(String, HashSet<String>)],
    target_index: usize,
) -> Result<AuthorshipHint, ReportError> {
    let (target_name, target_set) = sets
        .get(target_index)
        .ok_or(ReportError::TargetOutOfRange(target_index))?;

    let mut best: Option<(&str, usize)> = None;
    for (i, (name, trigrams)) in sets.iter().enumerate() {
        if i == target_index {
            continue;
        }
        let shared = trigrams.intersection(target_set).count();
        if best.is_none_or(|(_, top)| shared > top) {
            best = Some((name, shared));
        }
    }

    let (best_name, shared) = best.ok_or(ReportError::NoCandidates)?;
    Ok(AuthorshipHint {
        target: target_name.clone(),
        best: best_name.to_string(),
        shared,
    })
}
