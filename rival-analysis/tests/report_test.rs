//! Report assembly tests: one structured result, lossless serialization.

use rival_analysis::AnalysisEngine;
use rival_core::models::AnalysisReport;
use test_fixtures::matrix_from_grid;

#[test]
fn report_bundles_every_engine_result() {
    let built = matrix_from_grid(
        &["H1", "H2"],
        &[
            ("E1", &["II", "N"]),
            ("E2", &["I", "N"]),
            ("E3", &["-", "-"]),
        ],
    );
    let snapshot = built.snapshot();
    let report = AnalysisEngine::default().report(&snapshot).unwrap();

    assert_eq!(report.matrix, snapshot);
    assert_eq!(report.fingerprint, snapshot.fingerprint().unwrap());
    assert_eq!(report.ranking.entries.len(), 2);
    // Diagnosticity covers every row, rated or not.
    assert_eq!(report.diagnosticity.len(), 3);
    // Sensitivity covers only rated rows.
    assert_eq!(report.sensitivity.evidence.len(), 2);
    assert_eq!(
        report.ranking.winner_id(),
        report.sensitivity.baseline_winner
    );
}

#[test]
fn report_round_trips_through_json_without_loss() {
    let built = matrix_from_grid(
        &["power failure", "operator error"],
        &[
            ("alarm log gap", &["I", "CC"]),
            ("shift handover notes", &["N", "I"]),
        ],
    );
    let report = AnalysisEngine::default().report(&built.snapshot()).unwrap();

    let json = serde_json::to_string_pretty(&report).unwrap();
    let back: AnalysisReport = serde_json::from_str(&json).unwrap();
    assert_eq!(report, back);

    // Scores serialize as exact fixed-point integers, not floats.
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let first_score = &value["ranking"]["entries"][0]["score"];
    assert!(first_score.is_i64());
}

#[test]
fn empty_matrix_still_produces_a_valid_report() {
    let built = matrix_from_grid(&[], &[]);
    let report = AnalysisEngine::default().report(&built.snapshot()).unwrap();

    assert!(report.ranking.is_empty());
    assert!(report.diagnosticity.is_empty());
    assert!(report.sensitivity.evidence.is_empty());
}
