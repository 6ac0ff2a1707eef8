//! Diagnosticity classification tests.

use rival_analysis::AnalysisEngine;
use rival_core::config::AnalysisConfig;
use rival_core::errors::MatrixError;
use rival_core::matrix::EvidenceId;
use rival_core::models::{Diagnosticity, DiagnosticityBand};
use test_fixtures::matrix_from_grid;

fn engine() -> AnalysisEngine {
    AnalysisEngine::default()
}

// =============================================================================
// Insufficient data below 2 rated cells
// =============================================================================
#[test]
fn fewer_than_two_rated_cells_is_insufficient() {
    let built = matrix_from_grid(
        &["H1", "H2", "H3"],
        &[("unrated", &["-", "-", "-"]), ("one cell", &["II", "-", "-"])],
    );
    let engine = engine();
    let snapshot = built.snapshot();

    assert_eq!(
        engine.diagnosticity_for(&snapshot, built.evidence_row(0)).unwrap(),
        Diagnosticity::Insufficient { rated_cells: 0 }
    );
    assert_eq!(
        engine.diagnosticity_for(&snapshot, built.evidence_row(1)).unwrap(),
        Diagnosticity::Insufficient { rated_cells: 1 }
    );
}

// =============================================================================
// Range and default bands
// =============================================================================
#[test]
fn range_is_max_minus_min_of_numeric_ratings() {
    let built = matrix_from_grid(
        &["H1", "H2", "H3"],
        &[
            ("full spread", &["CC", "II", "N"]), // −2..2 → range 4
            ("moderate", &["I", "N", "-"]),      // 0..1 → range 1
            ("uniform", &["II", "II", "II"]),    // range 0
        ],
    );
    let engine = engine();
    let snapshot = built.snapshot();

    assert_eq!(
        engine.diagnosticity_for(&snapshot, built.evidence_row(0)).unwrap(),
        Diagnosticity::Classified {
            range: 4,
            band: DiagnosticityBand::High
        }
    );
    assert_eq!(
        engine.diagnosticity_for(&snapshot, built.evidence_row(1)).unwrap(),
        Diagnosticity::Classified {
            range: 1,
            band: DiagnosticityBand::Moderate
        }
    );
    // Uniformly Very Inconsistent is still non-diagnostic by construction.
    assert_eq!(
        engine.diagnosticity_for(&snapshot, built.evidence_row(2)).unwrap(),
        Diagnosticity::Classified {
            range: 0,
            band: DiagnosticityBand::Low
        }
    );
}

// =============================================================================
// Configurable band thresholds
// =============================================================================
#[test]
fn band_thresholds_come_from_config() {
    let config = AnalysisConfig {
        diagnosticity_high_threshold: 2.0,
        diagnosticity_moderate_threshold: 2.0,
        ..AnalysisConfig::default()
    };
    let built = matrix_from_grid(&["H1", "H2"], &[("spread 2", &["C", "I"])]);
    let engine = AnalysisEngine::new(config);

    assert_eq!(
        engine
            .diagnosticity_for(&built.snapshot(), built.evidence_row(0))
            .unwrap()
            .band(),
        Some(DiagnosticityBand::High)
    );
}

// =============================================================================
// Bulk variant covers every row in id order; unknown ids error
// =============================================================================
#[test]
fn bulk_evaluation_covers_all_rows_in_order() {
    let built = matrix_from_grid(
        &["H1", "H2"],
        &[("a", &["I", "N"]), ("b", &["-", "-"]), ("c", &["CC", "II"])],
    );
    let rows = engine().diagnosticity(&built.snapshot());

    assert_eq!(rows.len(), 3);
    let ids: Vec<_> = rows.iter().map(|r| r.evidence_id).collect();
    assert_eq!(ids, built.evidence);
    assert!(!rows[1].diagnosticity.is_defined());
}

#[test]
fn unknown_evidence_id_is_rejected() {
    let built = matrix_from_grid(&["H1"], &[("a", &["N"])]);
    let result = engine().diagnosticity_for(&built.snapshot(), EvidenceId(404));
    assert!(matches!(result, Err(MatrixError::EvidenceNotFound { .. })));
}
