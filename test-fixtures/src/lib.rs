//! Shared matrix builders for integration tests and benches.
//!
//! Grids are written the way an analyst reads them: one row per evidence
//! item, one rating code per hypothesis column ("CC", "C", "N", "I", "II",
//! or "-" for not yet rated).

use rival_core::matrix::{EvidenceId, HypothesisId, MatrixSnapshot, Rating, Weight};
use rival_matrix::Matrix;

/// A matrix built from a grid, with the ids in grid order for assertions.
pub struct BuiltMatrix {
    pub matrix: Matrix,
    pub hypotheses: Vec<HypothesisId>,
    pub evidence: Vec<EvidenceId>,
}

impl BuiltMatrix {
    pub fn snapshot(&self) -> MatrixSnapshot {
        self.matrix.snapshot()
    }

    pub fn hypothesis(&self, index: usize) -> HypothesisId {
        self.hypotheses[index]
    }

    pub fn evidence_row(&self, index: usize) -> EvidenceId {
        self.evidence[index]
    }
}

/// Build a matrix from rating-code rows, all evidence at weight 1.
///
/// # Panics
/// Panics on an unknown rating code or a row width that doesn't match the
/// hypothesis count — fixture bugs should fail loudly.
pub fn matrix_from_grid(hypotheses: &[&str], rows: &[(&str, &[&str])]) -> BuiltMatrix {
    let weighted: Vec<(&str, f64, &[&str])> =
        rows.iter().map(|&(text, codes)| (text, 1.0, codes)).collect();
    matrix_from_weighted_grid(hypotheses, &weighted)
}

/// Build a matrix from rating-code rows with per-row credibility weights.
pub fn matrix_from_weighted_grid(
    hypotheses: &[&str],
    rows: &[(&str, f64, &[&str])],
) -> BuiltMatrix {
    let mut matrix = Matrix::new();
    let hypothesis_ids: Vec<HypothesisId> = hypotheses
        .iter()
        .map(|text| matrix.add_hypothesis(*text))
        .collect();

    let mut evidence_ids = Vec::with_capacity(rows.len());
    for (text, weight, codes) in rows {
        assert_eq!(
            codes.len(),
            hypothesis_ids.len(),
            "row {text:?} has {} codes for {} hypotheses",
            codes.len(),
            hypothesis_ids.len()
        );
        let evidence_id = matrix.add_evidence_with(
            *text,
            Weight::new(*weight).expect("fixture weight must be valid"),
            None,
        );
        for (code, &hypothesis_id) in codes.iter().zip(&hypothesis_ids) {
            if *code == "-" {
                continue;
            }
            let level = Rating::from_code(code).expect("fixture rating code must be valid");
            matrix
                .set_rating(evidence_id, hypothesis_id, Some(level))
                .expect("fixture ids are live");
        }
        evidence_ids.push(evidence_id);
    }

    BuiltMatrix {
        matrix,
        hypotheses: hypothesis_ids,
        evidence: evidence_ids,
    }
}

/// A wide synthetic matrix for benches and stress tests: ratings cycle
/// through the scale deterministically.
pub fn synthetic_matrix(hypothesis_count: usize, evidence_count: usize) -> BuiltMatrix {
    let mut matrix = Matrix::new();
    let hypotheses: Vec<HypothesisId> = (0..hypothesis_count)
        .map(|i| matrix.add_hypothesis(format!("hypothesis {i}")))
        .collect();
    let evidence: Vec<EvidenceId> = (0..evidence_count)
        .map(|i| matrix.add_evidence(format!("evidence {i}")))
        .collect();

    for (i, &evidence_id) in evidence.iter().enumerate() {
        for (j, &hypothesis_id) in hypotheses.iter().enumerate() {
            let level = Rating::ALL[(i * 3 + j) % Rating::ALL.len()];
            matrix
                .set_rating(evidence_id, hypothesis_id, Some(level))
                .expect("ids are live");
        }
    }

    BuiltMatrix {
        matrix,
        hypotheses,
        evidence,
    }
}
