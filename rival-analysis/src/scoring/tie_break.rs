//! Tie-break trace: which rule ordered each adjacent pair of the ranking.
//!
//! The rules apply in order until one discriminates: score, then fewer
//! Very Inconsistent ratings, then fewer inconsistent cells, then earlier
//! creation order (smaller id — ids are assigned in creation order and
//! never reused).

use rival_core::models::{RankedHypothesis, TieBreakDecision, TieBreakRule};

/// The first rule that separates two adjacent entries of a sorted ranking.
/// `earlier` is the better-ranked of the two.
pub fn deciding_rule(earlier: &RankedHypothesis, later: &RankedHypothesis) -> TieBreakRule {
    if earlier.score != later.score {
        TieBreakRule::Score
    } else if earlier.very_inconsistent_count != later.very_inconsistent_count {
        TieBreakRule::VeryInconsistentCount
    } else if earlier.inconsistent_count != later.inconsistent_count {
        TieBreakRule::InconsistentCellCount
    } else {
        TieBreakRule::CreationOrder
    }
}

/// Trace entries for every adjacent pair of a sorted ranking.
pub fn trace_adjacent(entries: &[RankedHypothesis]) -> Vec<TieBreakDecision> {
    entries
        .windows(2)
        .map(|pair| TieBreakDecision {
            earlier: pair[0].hypothesis_id,
            later: pair[1].hypothesis_id,
            decided_by: deciding_rule(&pair[0], &pair[1]),
        })
        .collect()
}
