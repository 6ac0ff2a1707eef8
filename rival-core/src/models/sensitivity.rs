use serde::{Deserialize, Serialize};

use super::diagnosticity::Diagnosticity;
use crate::matrix::{EvidenceId, HypothesisId};

/// Which perturbation was applied to an evidence row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    /// All ratings in the row reverted to "not yet rated".
    Exclusion,
    /// Every rating in the row reflected about Neutral (CC↔II, C↔I).
    Inversion,
}

/// Outcome of re-ranking under one perturbation scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    /// Top-ranked hypothesis under the perturbed matrix, post tie-break.
    /// None only for the degenerate matrix with no hypotheses.
    pub winner: Option<HypothesisId>,
    /// True when the scenario winner differs from the baseline winner.
    pub winner_changed: bool,
}

/// Sensitivity verdict for one evidence row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceSensitivity {
    pub evidence_id: EvidenceId,
    pub diagnosticity: Diagnosticity,
    /// True when either scenario changes the top-ranked hypothesis.
    pub critical: bool,
    pub exclusion: ScenarioOutcome,
    pub inversion: ScenarioOutcome,
}

/// Per-evidence sensitivity results over one snapshot.
///
/// Rows are sorted by evidence id; evidence with no ratings is excluded
/// (nothing to perturb). Consumed by report tooling and "critical
/// evidence" UI badges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityReport {
    /// Winner of the unperturbed ranking the scenarios compare against.
    pub baseline_winner: Option<HypothesisId>,
    pub evidence: Vec<EvidenceSensitivity>,
}

impl SensitivityReport {
    /// Ids of all evidence rows flagged critical.
    pub fn critical_evidence(&self) -> Vec<EvidenceId> {
        self.evidence
            .iter()
            .filter(|e| e.critical)
            .map(|e| e.evidence_id)
            .collect()
    }

    pub fn row(&self, id: EvidenceId) -> Option<&EvidenceSensitivity> {
        self.evidence.iter().find(|e| e.evidence_id == id)
    }
}
