use std::collections::BTreeMap;

use tracing::debug;

use rival_core::errors::{MatrixError, MatrixResult};
use rival_core::matrix::{
    Evidence, EvidenceId, Hypothesis, HypothesisId, MatrixId, MatrixSnapshot, Rating, RatingCell,
    SourceRef, Weight,
};

/// The mutable ACH matrix.
///
/// Hypotheses and evidence are append-only: ids come from per-kind monotonic
/// counters and are never reused, so id order is creation order. Ratings are
/// upserted last-write-wins per cell; a cell absent from the map is
/// "not yet rated", which is distinct from an explicit Neutral rating.
#[derive(Debug, Clone)]
pub struct Matrix {
    id: MatrixId,
    hypotheses: Vec<Hypothesis>,
    evidence: Vec<Evidence>,
    ratings: BTreeMap<(EvidenceId, HypothesisId), Rating>,
    next_hypothesis_id: u64,
    next_evidence_id: u64,
}

impl Matrix {
    /// Create an empty matrix with a fresh identity.
    pub fn new() -> Self {
        Self {
            id: MatrixId::new(),
            hypotheses: Vec::new(),
            evidence: Vec::new(),
            ratings: BTreeMap::new(),
            next_hypothesis_id: 1,
            next_evidence_id: 1,
        }
    }

    /// Rebuild a mutable matrix from a previously exported snapshot.
    ///
    /// Id counters resume past the highest id present so restored matrices
    /// keep the never-reuse guarantee.
    pub fn from_snapshot(snapshot: MatrixSnapshot) -> Self {
        let next_hypothesis_id = snapshot
            .hypotheses
            .iter()
            .map(|h| h.id.0)
            .max()
            .unwrap_or(0)
            + 1;
        let next_evidence_id = snapshot.evidence.iter().map(|e| e.id.0).max().unwrap_or(0) + 1;
        let ratings = snapshot
            .ratings
            .iter()
            .map(|c| ((c.evidence_id, c.hypothesis_id), c.level))
            .collect();
        Self {
            id: snapshot.matrix_id,
            hypotheses: snapshot.hypotheses,
            evidence: snapshot.evidence,
            ratings,
            next_hypothesis_id,
            next_evidence_id,
        }
    }

    pub fn id(&self) -> MatrixId {
        self.id
    }

    pub fn hypotheses(&self) -> &[Hypothesis] {
        &self.hypotheses
    }

    pub fn evidence(&self) -> &[Evidence] {
        &self.evidence
    }

    pub fn rating_count(&self) -> usize {
        self.ratings.len()
    }

    // === Mutation: entities ===

    /// Add a hypothesis column. Returns its id.
    pub fn add_hypothesis(&mut self, text: impl Into<String>) -> HypothesisId {
        let id = HypothesisId(self.next_hypothesis_id);
        self.next_hypothesis_id += 1;
        self.hypotheses.push(Hypothesis::new(id, text));
        debug!(matrix = %self.id, hypothesis = %id, "hypothesis added");
        id
    }

    /// Add an evidence row with default weight and no source link.
    pub fn add_evidence(&mut self, text: impl Into<String>) -> EvidenceId {
        self.add_evidence_with(text, Weight::ONE, None)
    }

    /// Add an evidence row with an explicit weight and optional corpus locator.
    pub fn add_evidence_with(
        &mut self,
        text: impl Into<String>,
        weight: Weight,
        source_ref: Option<SourceRef>,
    ) -> EvidenceId {
        let id = EvidenceId(self.next_evidence_id);
        self.next_evidence_id += 1;
        let mut item = Evidence::new(id, text).with_weight(weight);
        item.source_ref = source_ref;
        self.evidence.push(item);
        debug!(matrix = %self.id, evidence = %id, %weight, "evidence added");
        id
    }

    /// Remove a hypothesis column and cascade-delete its ratings.
    pub fn remove_hypothesis(&mut self, id: HypothesisId) -> MatrixResult<()> {
        let index = self
            .hypotheses
            .iter()
            .position(|h| h.id == id)
            .ok_or(MatrixError::HypothesisNotFound { id })?;
        self.hypotheses.remove(index);
        self.ratings.retain(|&(_, h), _| h != id);
        debug!(matrix = %self.id, hypothesis = %id, "hypothesis removed");
        Ok(())
    }

    /// Remove an evidence row and cascade-delete its ratings.
    pub fn remove_evidence(&mut self, id: EvidenceId) -> MatrixResult<()> {
        let index = self
            .evidence
            .iter()
            .position(|e| e.id == id)
            .ok_or(MatrixError::EvidenceNotFound { id })?;
        self.evidence.remove(index);
        self.ratings.retain(|&(e, _), _| e != id);
        debug!(matrix = %self.id, evidence = %id, "evidence removed");
        Ok(())
    }

    /// Edit hypothesis display text. Never affects scoring.
    pub fn update_hypothesis_text(
        &mut self,
        id: HypothesisId,
        text: impl Into<String>,
    ) -> MatrixResult<()> {
        let hypothesis = self
            .hypotheses
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or(MatrixError::HypothesisNotFound { id })?;
        hypothesis.text = text.into();
        Ok(())
    }

    /// Edit evidence display text. Never affects scoring.
    pub fn update_evidence_text(
        &mut self,
        id: EvidenceId,
        text: impl Into<String>,
    ) -> MatrixResult<()> {
        let evidence = self
            .evidence
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(MatrixError::EvidenceNotFound { id })?;
        evidence.text = text.into();
        Ok(())
    }

    /// Re-weight an evidence row's credibility.
    pub fn set_evidence_weight(&mut self, id: EvidenceId, weight: Weight) -> MatrixResult<()> {
        let evidence = self
            .evidence
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(MatrixError::EvidenceNotFound { id })?;
        evidence.weight = weight;
        debug!(matrix = %self.id, evidence = %id, %weight, "evidence re-weighted");
        Ok(())
    }

    // === Mutation: ratings ===

    /// Upsert one cell, or revert it to "not yet rated" with `None`.
    ///
    /// Last write wins per cell; both ids are validated before any change.
    pub fn set_rating(
        &mut self,
        evidence_id: EvidenceId,
        hypothesis_id: HypothesisId,
        level: Option<Rating>,
    ) -> MatrixResult<()> {
        if !self.evidence.iter().any(|e| e.id == evidence_id) {
            return Err(MatrixError::EvidenceNotFound { id: evidence_id });
        }
        if !self.hypotheses.iter().any(|h| h.id == hypothesis_id) {
            return Err(MatrixError::HypothesisNotFound { id: hypothesis_id });
        }
        match level {
            Some(level) => {
                self.ratings.insert((evidence_id, hypothesis_id), level);
                debug!(
                    matrix = %self.id, evidence = %evidence_id,
                    hypothesis = %hypothesis_id, %level, "rating set"
                );
            }
            None => {
                self.ratings.remove(&(evidence_id, hypothesis_id));
                debug!(
                    matrix = %self.id, evidence = %evidence_id,
                    hypothesis = %hypothesis_id, "rating unset"
                );
            }
        }
        Ok(())
    }

    /// The rating of one cell, if rated.
    pub fn rating(&self, evidence_id: EvidenceId, hypothesis_id: HypothesisId) -> Option<Rating> {
        self.ratings.get(&(evidence_id, hypothesis_id)).copied()
    }

    // === Reads ===

    /// Immutable point-in-time view for the analysis engines and for export.
    ///
    /// The snapshot owns its data: further mutation of this matrix never
    /// alters an already-returned snapshot. Rating cells come out sorted by
    /// `(evidence_id, hypothesis_id)` courtesy of the underlying map order.
    pub fn snapshot(&self) -> MatrixSnapshot {
        MatrixSnapshot {
            matrix_id: self.id,
            hypotheses: self.hypotheses.clone(),
            evidence: self.evidence.clone(),
            ratings: self
                .ratings
                .iter()
                .map(|(&(evidence_id, hypothesis_id), &level)| RatingCell {
                    evidence_id,
                    hypothesis_id,
                    level,
                })
                .collect(),
        }
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::new()
    }
}
