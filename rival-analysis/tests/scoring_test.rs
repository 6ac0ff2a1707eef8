//! Scoring and ranking tests, including the classic worked example:
//! two hypotheses, three evidence rows, disconfirmation-only accumulation.

use rival_analysis::AnalysisEngine;
use rival_core::config::AnalysisConfig;
use rival_core::matrix::{Score, Weight};
use rival_core::models::TieBreakRule;
use test_fixtures::{matrix_from_grid, matrix_from_weighted_grid};

fn engine() -> AnalysisEngine {
    AnalysisEngine::default()
}

// =============================================================================
// Worked example: E1=(II,N), E2=(I,N), E3=(N,N) → H1=3, H2=0, winner H2
// =============================================================================
#[test]
fn worked_example_scores_and_winner() {
    let built = matrix_from_grid(
        &["H1", "H2"],
        &[
            ("E1", &["II", "N"]),
            ("E2", &["I", "N"]),
            ("E3", &["N", "N"]),
        ],
    );
    let ranking = engine().rank(&built.snapshot());

    let h1 = ranking.entry(built.hypothesis(0)).unwrap();
    let h2 = ranking.entry(built.hypothesis(1)).unwrap();
    assert_eq!(h1.score, Score::contribution(Weight::ONE, 3));
    assert_eq!(h2.score, Score::ZERO);
    assert_eq!(ranking.winner_id(), Some(built.hypothesis(1)));
    assert_eq!(h1.rank, 2);
    assert_eq!(h2.rank, 1);
}

// =============================================================================
// Only disconfirmation accumulates; support is display-only
// =============================================================================
#[test]
fn consistent_ratings_never_reduce_the_score() {
    let built = matrix_from_grid(
        &["H1", "H2"],
        &[
            ("E1", &["CC", "I"]),
            ("E2", &["C", "N"]),
            ("E3", &["CC", "N"]),
        ],
    );
    let ranking = engine().rank(&built.snapshot());

    let h1 = ranking.entry(built.hypothesis(0)).unwrap();
    assert_eq!(h1.score, Score::ZERO);
    assert_eq!(h1.support_count, 3);
    assert_eq!(h1.inconsistent_count, 0);

    let h2 = ranking.entry(built.hypothesis(1)).unwrap();
    assert_eq!(h2.score, Score::contribution(Weight::ONE, 1));
    // Heavily supported H1 still wins only because it has no disconfirmation.
    assert_eq!(ranking.winner_id(), Some(built.hypothesis(0)));
}

// =============================================================================
// Unrated vs Neutral: absence contributes nothing anywhere
// =============================================================================
#[test]
fn unrated_cells_are_excluded_from_scoring_denominators() {
    let built = matrix_from_grid(&["H1", "H2"], &[("E1", &["N", "-"])]);
    let ranking = engine().rank(&built.snapshot());

    let h1 = ranking.entry(built.hypothesis(0)).unwrap();
    assert_eq!(h1.rated_cells, 1);
    assert!(!h1.insufficiently_evaluated);

    let h2 = ranking.entry(built.hypothesis(1)).unwrap();
    assert_eq!(h2.rated_cells, 0);
    assert!(h2.insufficiently_evaluated, "zero rated cells must be flagged");
    assert_eq!(h2.score, Score::ZERO);
}

// =============================================================================
// Tie-break ladder: II count, then inconsistent cells, then creation order
// =============================================================================
#[test]
fn tie_breaks_on_fewer_very_inconsistent_ratings() {
    // Both score 2.00: H1 via one II, H2 via two I.
    let built = matrix_from_grid(
        &["H1", "H2"],
        &[("E1", &["II", "I"]), ("E2", &["N", "I"])],
    );
    let ranking = engine().rank(&built.snapshot());

    // H2 has zero II ratings, H1 has one — H2 wins the tie.
    assert_eq!(ranking.winner_id(), Some(built.hypothesis(1)));
    let decision = &ranking.tie_breaks[0];
    assert_eq!(decision.decided_by, TieBreakRule::VeryInconsistentCount);
}

#[test]
fn tie_breaks_on_fewer_inconsistent_cells() {
    // Both score 2.00 with one II each. The weight-0 row gives H1 an extra
    // inconsistent cell without moving its score.
    let built = matrix_from_weighted_grid(
        &["H1", "H2"],
        &[
            ("E1", 1.0, &["II", "II"]),
            ("E2", 0.0, &["I", "N"]),
        ],
    );
    let ranking = engine().rank(&built.snapshot());

    assert_eq!(ranking.winner_id(), Some(built.hypothesis(1)));
    assert_eq!(
        ranking.tie_breaks[0].decided_by,
        TieBreakRule::InconsistentCellCount
    );
}

#[test]
fn tie_breaks_on_creation_order_last() {
    let built = matrix_from_grid(
        &["H1", "H2"],
        &[("E1", &["I", "I"]), ("E2", &["N", "N"])],
    );
    let ranking = engine().rank(&built.snapshot());

    // Identical columns: the earlier-created hypothesis wins.
    assert_eq!(ranking.winner_id(), Some(built.hypothesis(0)));
    assert_eq!(ranking.tie_breaks[0].decided_by, TieBreakRule::CreationOrder);
}

// =============================================================================
// Credibility weights
// =============================================================================
#[test]
fn weights_multiply_contributions_exactly() {
    let built = matrix_from_weighted_grid(
        &["H1"],
        &[
            ("half credibility", 0.5, &["II"]),
            ("double credibility", 2.0, &["I"]),
        ],
    );
    let ranking = engine().rank(&built.snapshot());

    // 0.5 × 2 + 2.0 × 1 = 3.00
    let h1 = ranking.entry(built.hypothesis(0)).unwrap();
    assert_eq!(h1.score.hundredths(), 300);
}

#[test]
fn zero_weight_evidence_is_a_scoring_noop_but_still_counted() {
    let built = matrix_from_weighted_grid(&["H1"], &[("rumor", 0.0, &["II"])]);
    let ranking = engine().rank(&built.snapshot());

    let h1 = ranking.entry(built.hypothesis(0)).unwrap();
    assert_eq!(h1.score, Score::ZERO);
    // The cell is still rated: it counts toward cell tallies and listings.
    assert_eq!(h1.rated_cells, 1);
    assert_eq!(h1.inconsistent_count, 1);
}

#[test]
fn weighting_can_be_disabled_by_config() {
    let config = AnalysisConfig {
        apply_evidence_weights: false,
        ..AnalysisConfig::default()
    };
    let built = matrix_from_weighted_grid(&["H1"], &[("discounted", 0.25, &["II"])]);
    let ranking = AnalysisEngine::new(config).rank(&built.snapshot());

    // Weight demoted to a display field: contribution is the plain rating.
    let h1 = ranking.entry(built.hypothesis(0)).unwrap();
    assert_eq!(h1.score, Score::contribution(Weight::ONE, 2));
}

// =============================================================================
// Degenerate matrices rank without error
// =============================================================================
#[test]
fn empty_matrix_yields_empty_ranking() {
    let built = matrix_from_grid(&[], &[]);
    let ranking = engine().rank(&built.snapshot());
    assert!(ranking.is_empty());
    assert_eq!(ranking.winner_id(), None);
    assert!(ranking.tie_breaks.is_empty());
}
