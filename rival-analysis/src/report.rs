//! Report assembly: the single structured handoff to export collaborators.

use chrono::Utc;

use rival_core::config::AnalysisConfig;
use rival_core::errors::MatrixResult;
use rival_core::matrix::MatrixSnapshot;
use rival_core::models::AnalysisReport;

use crate::{diagnosticity, scoring, sensitivity};

/// Run every engine over one snapshot and bundle the results.
///
/// No formatting, localization, or file I/O happens here — rendering to
/// PDF/Markdown/JSON is owned by the consumers of the returned structure.
pub fn assemble(snapshot: &MatrixSnapshot, config: &AnalysisConfig) -> MatrixResult<AnalysisReport> {
    Ok(AnalysisReport {
        fingerprint: snapshot.fingerprint()?,
        generated_at: Utc::now(),
        ranking: scoring::rank(snapshot, config),
        diagnosticity: diagnosticity::evaluate(snapshot, config),
        sensitivity: sensitivity::analyze(snapshot, config),
        matrix: snapshot.clone(),
    })
}
