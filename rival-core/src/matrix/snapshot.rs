use serde::{Deserialize, Serialize};

use super::evidence::Evidence;
use super::hypothesis::Hypothesis;
use super::ids::{EvidenceId, HypothesisId, MatrixId};
use super::rating::Rating;
use super::weight::Weight;
use crate::errors::{MatrixError, MatrixResult};

/// One rated cell of the sparse matrix.
///
/// Cells that were never rated (or were reverted to "not yet rated") simply
/// do not appear — absence is a distinct state from an explicit Neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingCell {
    pub evidence_id: EvidenceId,
    pub hypothesis_id: HypothesisId,
    pub level: Rating,
}

/// Immutable point-in-time view of a matrix.
///
/// Hypotheses and evidence are listed in creation order; rating cells are
/// sorted by `(evidence_id, hypothesis_id)`. Returned snapshots are plain
/// values — later mutation of the source matrix never alters them, and the
/// analysis engines consume nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatrixSnapshot {
    pub matrix_id: MatrixId,
    pub hypotheses: Vec<Hypothesis>,
    pub evidence: Vec<Evidence>,
    pub ratings: Vec<RatingCell>,
}

impl MatrixSnapshot {
    /// Look up a hypothesis by id.
    pub fn hypothesis(&self, id: HypothesisId) -> Option<&Hypothesis> {
        self.hypotheses.iter().find(|h| h.id == id)
    }

    /// Look up an evidence item by id.
    pub fn evidence_item(&self, id: EvidenceId) -> Option<&Evidence> {
        self.evidence.iter().find(|e| e.id == id)
    }

    /// The rating of one cell, if the cell has been rated.
    pub fn rating(&self, evidence_id: EvidenceId, hypothesis_id: HypothesisId) -> Option<Rating> {
        self.ratings
            .iter()
            .find(|c| c.evidence_id == evidence_id && c.hypothesis_id == hypothesis_id)
            .map(|c| c.level)
    }

    /// All rated cells in one evidence row.
    pub fn ratings_for_evidence(
        &self,
        evidence_id: EvidenceId,
    ) -> impl Iterator<Item = &RatingCell> {
        self.ratings
            .iter()
            .filter(move |c| c.evidence_id == evidence_id)
    }

    /// All rated cells in one hypothesis column.
    pub fn ratings_for_hypothesis(
        &self,
        hypothesis_id: HypothesisId,
    ) -> impl Iterator<Item = &RatingCell> {
        self.ratings
            .iter()
            .filter(move |c| c.hypothesis_id == hypothesis_id)
    }

    /// Credibility weight of an evidence row, if the row exists.
    pub fn evidence_weight(&self, evidence_id: EvidenceId) -> Option<Weight> {
        self.evidence_item(evidence_id).map(|e| e.weight)
    }

    /// blake3 hash of the canonical JSON encoding.
    ///
    /// Export collaborators use this to detect whether a stored report still
    /// matches the matrix it was generated from.
    pub fn fingerprint(&self) -> MatrixResult<String> {
        let bytes = serde_json::to_vec(self).map_err(|e| MatrixError::SerializationFailed {
            reason: e.to_string(),
        })?;
        Ok(blake3::hash(&bytes).to_hex().to_string())
    }
}
