//! Inconsistency scoring and ranking.
//!
//! Only the inconsistent half of the rating scale accumulates: absence of
//! disconfirmation, not presence of confirmation, is the signal. Consistent
//! ratings are tallied as display-only support counts.

pub mod tie_break;

use std::collections::BTreeMap;

use tracing::trace;

use rival_core::config::AnalysisConfig;
use rival_core::matrix::{HypothesisId, MatrixSnapshot, Score, Weight};
use rival_core::models::{RankedHypothesis, Ranking};

/// Per-column tally accumulated in a single pass over the rated cells.
#[derive(Debug, Clone, Copy, Default)]
struct ColumnTally {
    score: Score,
    support_count: usize,
    inconsistent_count: usize,
    very_inconsistent_count: usize,
    rated_cells: usize,
}

/// Rank all hypotheses in a snapshot, ascending by inconsistency score.
///
/// Linear in the number of rated cells. Hypotheses with zero rated cells
/// score 0 and are flagged `insufficiently_evaluated` — the caller must not
/// present them as confident winners.
pub fn rank(snapshot: &MatrixSnapshot, config: &AnalysisConfig) -> Ranking {
    let mut tallies: BTreeMap<HypothesisId, ColumnTally> = snapshot
        .hypotheses
        .iter()
        .map(|h| (h.id, ColumnTally::default()))
        .collect();

    for cell in &snapshot.ratings {
        let Some(tally) = tallies.get_mut(&cell.hypothesis_id) else {
            continue;
        };
        tally.rated_cells += 1;
        if cell.level.is_consistent() {
            tally.support_count += 1;
        }
        let inconsistency = cell.level.inconsistency();
        if inconsistency > 0 {
            tally.inconsistent_count += 1;
            if inconsistency == 2 {
                tally.very_inconsistent_count += 1;
            }
            let weight = if config.apply_evidence_weights {
                snapshot.evidence_weight(cell.evidence_id).unwrap_or(Weight::ONE)
            } else {
                Weight::ONE
            };
            tally.score = tally.score + Score::contribution(weight, inconsistency);
        }
    }

    // Ids are assigned in creation order and never reused, so the id itself
    // is the final creation-order fallback of the tie-break key.
    let mut ordered: Vec<(HypothesisId, ColumnTally)> = snapshot
        .hypotheses
        .iter()
        .map(|h| (h.id, tallies[&h.id]))
        .collect();
    ordered.sort_by_key(|(id, t)| {
        (t.score, t.very_inconsistent_count, t.inconsistent_count, *id)
    });

    let entries: Vec<RankedHypothesis> = ordered
        .iter()
        .enumerate()
        .map(|(i, (id, tally))| RankedHypothesis {
            rank: i + 1,
            hypothesis_id: *id,
            score: tally.score,
            support_count: tally.support_count,
            inconsistent_count: tally.inconsistent_count,
            very_inconsistent_count: tally.very_inconsistent_count,
            rated_cells: tally.rated_cells,
            insufficiently_evaluated: tally.rated_cells == 0,
        })
        .collect();

    let tie_breaks = tie_break::trace_adjacent(&entries);

    trace!(
        matrix = %snapshot.matrix_id,
        hypotheses = entries.len(),
        rated_cells = snapshot.ratings.len(),
        "ranking computed"
    );

    Ranking { entries, tie_breaks }
}
