use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::matrix::EvidenceId;

/// Discriminating-power classification band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticityBand {
    High,
    Moderate,
    /// Non-diagnostic: the ratings barely vary across hypotheses, so the
    /// evidence cannot help distinguish them — even if every rating is
    /// Very Inconsistent.
    Low,
}

impl DiagnosticityBand {
    /// Classify a numeric range against the configured thresholds.
    pub fn from_range(range: u8, config: &AnalysisConfig) -> Self {
        let range = f64::from(range);
        if range >= config.diagnosticity_high_threshold {
            Self::High
        } else if range >= config.diagnosticity_moderate_threshold {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Moderate => "moderate",
            Self::Low => "low",
        }
    }
}

/// Diagnosticity of one evidence row.
///
/// Defined as `max − min` of the numeric ratings across rated cells; rows
/// with fewer than 2 rated cells have no defined value. Insufficient data
/// is a result state, not an error — it never blocks the rest of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Diagnosticity {
    Insufficient { rated_cells: usize },
    Classified { range: u8, band: DiagnosticityBand },
}

impl Diagnosticity {
    pub fn is_defined(&self) -> bool {
        matches!(self, Self::Classified { .. })
    }

    pub fn band(&self) -> Option<DiagnosticityBand> {
        match self {
            Self::Classified { band, .. } => Some(*band),
            Self::Insufficient { .. } => None,
        }
    }

    pub fn range(&self) -> Option<u8> {
        match self {
            Self::Classified { range, .. } => Some(*range),
            Self::Insufficient { .. } => None,
        }
    }
}

/// Diagnosticity annotation for one evidence row of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceDiagnosticity {
    pub evidence_id: EvidenceId,
    pub diagnosticity: Diagnosticity,
}
