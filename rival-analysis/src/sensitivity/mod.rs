//! Sensitivity analysis: how much the conclusion depends on any single
//! piece of evidence.
//!
//! For each evidence row with at least one rating, the exclusion and
//! inversion scenarios re-rank a transient copy of the snapshot through the
//! full scoring engine. Exhaustive, not incremental: every scenario is a
//! complete re-score.

pub mod scenarios;

use rayon::prelude::*;
use tracing::debug;

use rival_core::config::AnalysisConfig;
use rival_core::matrix::{EvidenceId, HypothesisId, MatrixSnapshot};
use rival_core::models::{
    EvidenceSensitivity, Scenario, ScenarioOutcome, SensitivityReport,
};

use crate::diagnosticity;
use crate::scoring;

/// Run both perturbation scenarios for every rated evidence row.
///
/// Pure and read-only over the snapshot; scenarios are independent, so the
/// evaluation fans out across the thread pool once the rated-row count
/// reaches the configured threshold. Rows come back sorted by evidence id
/// either way, so the schedule never shows in the result.
pub fn analyze(snapshot: &MatrixSnapshot, config: &AnalysisConfig) -> SensitivityReport {
    let baseline_winner = scoring::rank(snapshot, config).winner_id();

    let rated: Vec<EvidenceId> = snapshot
        .evidence
        .iter()
        .map(|e| e.id)
        .filter(|&id| snapshot.ratings_for_evidence(id).next().is_some())
        .collect();

    debug!(
        matrix = %snapshot.matrix_id,
        rated_rows = rated.len(),
        "sensitivity analysis started"
    );

    let evaluate = |&evidence_id: &EvidenceId| -> EvidenceSensitivity {
        evaluate_row(snapshot, evidence_id, baseline_winner, config)
    };

    let mut rows: Vec<EvidenceSensitivity> =
        if rated.len() >= config.parallel_sensitivity_threshold {
            rated.par_iter().map(evaluate).collect()
        } else {
            rated.iter().map(evaluate).collect()
        };
    rows.sort_by_key(|r| r.evidence_id);

    SensitivityReport {
        baseline_winner,
        evidence: rows,
    }
}

fn evaluate_row(
    snapshot: &MatrixSnapshot,
    evidence_id: EvidenceId,
    baseline_winner: Option<HypothesisId>,
    config: &AnalysisConfig,
) -> EvidenceSensitivity {
    let exclusion = run_scenario(
        Scenario::Exclusion,
        &scenarios::exclude_evidence(snapshot, evidence_id),
        baseline_winner,
        config,
    );
    let inversion = run_scenario(
        Scenario::Inversion,
        &scenarios::invert_evidence(snapshot, evidence_id),
        baseline_winner,
        config,
    );

    EvidenceSensitivity {
        evidence_id,
        diagnosticity: diagnosticity::classify(snapshot, evidence_id, config),
        critical: exclusion.winner_changed || inversion.winner_changed,
        exclusion,
        inversion,
    }
}

fn run_scenario(
    scenario: Scenario,
    perturbed: &MatrixSnapshot,
    baseline_winner: Option<HypothesisId>,
    config: &AnalysisConfig,
) -> ScenarioOutcome {
    let winner = scoring::rank(perturbed, config).winner_id();
    ScenarioOutcome {
        scenario,
        winner,
        winner_changed: winner != baseline_winner,
    }
}
