//! Default values backing `Default` impls and `#[serde(default)]` fields.

/// Numeric range at or above which evidence is classified High diagnosticity.
pub const DEFAULT_DIAGNOSTICITY_HIGH_THRESHOLD: f64 = 3.0;

/// Numeric range at or above which evidence is classified Moderate.
/// Below this it is Low / non-diagnostic.
pub const DEFAULT_DIAGNOSTICITY_MODERATE_THRESHOLD: f64 = 1.0;

/// Whether credibility weights multiply scoring contributions.
pub const DEFAULT_APPLY_EVIDENCE_WEIGHTS: bool = true;

/// Evidence count at which sensitivity analysis fans out across threads.
pub const DEFAULT_PARALLEL_SENSITIVITY_THRESHOLD: usize = 32;
