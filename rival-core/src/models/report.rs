use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::diagnosticity::EvidenceDiagnosticity;
use super::ranking::Ranking;
use super::sensitivity::SensitivityReport;
use crate::matrix::MatrixSnapshot;

/// The single structured result handed to export and report collaborators.
///
/// Pure data: the engine performs no formatting, localization, or file I/O.
/// Every field serializes without loss — scores and weights are fixed-point
/// integers, ids are stable, and the fingerprint ties the report back to the
/// exact snapshot it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The raw matrix the analysis ran over.
    pub matrix: MatrixSnapshot,
    /// blake3 fingerprint of `matrix`.
    pub fingerprint: String,
    pub generated_at: DateTime<Utc>,
    /// Ranked hypotheses with score and support/inconsistency breakdowns.
    pub ranking: Ranking,
    /// Diagnosticity for every evidence row, rated or not.
    pub diagnosticity: Vec<EvidenceDiagnosticity>,
    /// Criticality verdicts for every rated evidence row.
    pub sensitivity: SensitivityReport,
}
