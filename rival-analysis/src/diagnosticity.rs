//! Diagnosticity: how much an evidence row discriminates between hypotheses.
//!
//! Range of the numeric ratings across rated cells only — unrated cells are
//! skipped, weights play no part. Evidence rated identically against every
//! hypothesis is non-diagnostic by construction, even if every rating is
//! Very Inconsistent.

use rival_core::config::AnalysisConfig;
use rival_core::constants::MIN_DIAGNOSTICITY_CELLS;
use rival_core::errors::{MatrixError, MatrixResult};
use rival_core::matrix::{EvidenceId, MatrixSnapshot};
use rival_core::models::{Diagnosticity, DiagnosticityBand, EvidenceDiagnosticity};

/// Diagnosticity of a single evidence row.
///
/// Errors only for an unknown evidence id; a row with fewer than 2 rated
/// cells yields the `Insufficient` result state, not an error.
pub fn row(
    snapshot: &MatrixSnapshot,
    evidence_id: EvidenceId,
    config: &AnalysisConfig,
) -> MatrixResult<Diagnosticity> {
    if snapshot.evidence_item(evidence_id).is_none() {
        return Err(MatrixError::EvidenceNotFound { id: evidence_id });
    }
    Ok(classify(snapshot, evidence_id, config))
}

/// Diagnosticity for every evidence row, in id order.
pub fn evaluate(snapshot: &MatrixSnapshot, config: &AnalysisConfig) -> Vec<EvidenceDiagnosticity> {
    snapshot
        .evidence
        .iter()
        .map(|e| EvidenceDiagnosticity {
            evidence_id: e.id,
            diagnosticity: classify(snapshot, e.id, config),
        })
        .collect()
}

pub(crate) fn classify(
    snapshot: &MatrixSnapshot,
    evidence_id: EvidenceId,
    config: &AnalysisConfig,
) -> Diagnosticity {
    let mut min = i8::MAX;
    let mut max = i8::MIN;
    let mut rated_cells = 0usize;
    for cell in snapshot.ratings_for_evidence(evidence_id) {
        let numeric = cell.level.numeric();
        min = min.min(numeric);
        max = max.max(numeric);
        rated_cells += 1;
    }

    if rated_cells < MIN_DIAGNOSTICITY_CELLS {
        return Diagnosticity::Insufficient { rated_cells };
    }

    let range = (max - min) as u8;
    Diagnosticity::Classified {
        range,
        band: DiagnosticityBand::from_range(range, config),
    }
}
