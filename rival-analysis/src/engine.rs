//! AnalysisEngine — facade over the scoring, diagnosticity, sensitivity,
//! and report-assembly modules, holding one configuration.

use rival_core::config::AnalysisConfig;
use rival_core::errors::MatrixResult;
use rival_core::matrix::{EvidenceId, MatrixSnapshot};
use rival_core::models::{
    AnalysisReport, Diagnosticity, EvidenceDiagnosticity, Ranking, SensitivityReport,
};

use crate::{diagnosticity, report, scoring, sensitivity};

/// The ACH analysis engine.
///
/// Stateless apart from its configuration: every method is a pure function
/// of the snapshot passed in, so one engine can serve any number of
/// matrices and is safe to share across threads.
pub struct AnalysisEngine {
    config: AnalysisConfig,
}

impl AnalysisEngine {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Ranked conclusion: ascending inconsistency with tie-break trace.
    pub fn rank(&self, snapshot: &MatrixSnapshot) -> Ranking {
        scoring::rank(snapshot, &self.config)
    }

    /// Diagnosticity classification for one evidence row.
    pub fn diagnosticity_for(
        &self,
        snapshot: &MatrixSnapshot,
        evidence_id: EvidenceId,
    ) -> MatrixResult<Diagnosticity> {
        diagnosticity::row(snapshot, evidence_id, &self.config)
    }

    /// Diagnosticity for every evidence row, in id order.
    pub fn diagnosticity(&self, snapshot: &MatrixSnapshot) -> Vec<EvidenceDiagnosticity> {
        diagnosticity::evaluate(snapshot, &self.config)
    }

    /// Exclusion/inversion scenarios for every rated evidence row.
    pub fn sensitivity(&self, snapshot: &MatrixSnapshot) -> SensitivityReport {
        sensitivity::analyze(snapshot, &self.config)
    }

    /// The full structured result for export/report collaborators.
    pub fn report(&self, snapshot: &MatrixSnapshot) -> MatrixResult<AnalysisReport> {
        report::assemble(snapshot, &self.config)
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}
