use serde::{Deserialize, Serialize};

use super::defaults;

/// Analysis engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Range threshold for the High diagnosticity band.
    pub diagnosticity_high_threshold: f64,
    /// Range threshold for the Moderate band; below it is Low.
    pub diagnosticity_moderate_threshold: f64,
    /// When false, credibility weights are advisory display fields and every
    /// evidence row scores at weight 1.
    pub apply_evidence_weights: bool,
    /// Evidence count at which sensitivity scenarios run on the thread pool.
    pub parallel_sensitivity_threshold: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            diagnosticity_high_threshold: defaults::DEFAULT_DIAGNOSTICITY_HIGH_THRESHOLD,
            diagnosticity_moderate_threshold: defaults::DEFAULT_DIAGNOSTICITY_MODERATE_THRESHOLD,
            apply_evidence_weights: defaults::DEFAULT_APPLY_EVIDENCE_WEIGHTS,
            parallel_sensitivity_threshold: defaults::DEFAULT_PARALLEL_SENSITIVITY_THRESHOLD,
        }
    }
}
