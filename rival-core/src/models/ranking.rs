use serde::{Deserialize, Serialize};

use crate::matrix::{HypothesisId, Score};

/// One hypothesis in the ranked conclusion, lowest inconsistency first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedHypothesis {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub hypothesis_id: HypothesisId,
    /// Accumulated inconsistency. Lower is better.
    pub score: Score,
    /// Rated cells on the consistent half of the scale. Display-only:
    /// support never reduces the score.
    pub support_count: usize,
    /// Rated cells with inconsistency > 0.
    pub inconsistent_count: usize,
    /// Rated cells at Very Inconsistent.
    pub very_inconsistent_count: usize,
    /// Total rated cells in this column.
    pub rated_cells: usize,
    /// True when the column has no rated cells at all. Callers must render
    /// such a hypothesis distinctly, never as a confident winner.
    pub insufficiently_evaluated: bool,
}

/// Which rule ordered a pair of hypotheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreakRule {
    /// Plain score comparison — no tie to break.
    Score,
    /// Equal scores, fewer Very Inconsistent ratings wins.
    VeryInconsistentCount,
    /// Still tied, fewer cells with any inconsistency wins.
    InconsistentCellCount,
    /// Still tied, earlier creation order wins.
    CreationOrder,
}

/// Trace entry for one adjacent pair of the final ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TieBreakDecision {
    /// The hypothesis ranked earlier (better).
    pub earlier: HypothesisId,
    /// The hypothesis ranked immediately after it.
    pub later: HypothesisId,
    pub decided_by: TieBreakRule,
}

/// Ordered conclusion over one matrix snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub entries: Vec<RankedHypothesis>,
    /// Why each adjacent pair is ordered the way it is.
    pub tie_breaks: Vec<TieBreakDecision>,
}

impl Ranking {
    /// The top-ranked hypothesis, if the matrix has any hypotheses.
    pub fn winner(&self) -> Option<&RankedHypothesis> {
        self.entries.first()
    }

    /// The top-ranked hypothesis id, the unit of comparison for
    /// sensitivity scenarios.
    pub fn winner_id(&self) -> Option<HypothesisId> {
        self.entries.first().map(|e| e.hypothesis_id)
    }

    pub fn entry(&self, id: HypothesisId) -> Option<&RankedHypothesis> {
        self.entries.iter().find(|e| e.hypothesis_id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
