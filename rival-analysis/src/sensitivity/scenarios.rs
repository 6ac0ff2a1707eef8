//! Perturbation scenarios, each producing a transient copy of a snapshot.
//! The canonical matrix is never touched.

use rival_core::matrix::{EvidenceId, MatrixSnapshot};

/// Remove every rating in one evidence row — the row becomes entirely
/// "not yet rated", as if the evidence had never been assessed.
pub fn exclude_evidence(snapshot: &MatrixSnapshot, evidence_id: EvidenceId) -> MatrixSnapshot {
    let mut perturbed = snapshot.clone();
    perturbed.ratings.retain(|c| c.evidence_id != evidence_id);
    perturbed
}

/// Reflect every rating in one evidence row about Neutral (CC↔II, C↔I,
/// N unchanged) — as if the evidence had been read exactly backwards.
pub fn invert_evidence(snapshot: &MatrixSnapshot, evidence_id: EvidenceId) -> MatrixSnapshot {
    let mut perturbed = snapshot.clone();
    for cell in perturbed
        .ratings
        .iter_mut()
        .filter(|c| c.evidence_id == evidence_id)
    {
        cell.level = cell.level.inverted();
    }
    perturbed
}
