use crate::matrix::{EvidenceId, HypothesisId};

/// Structural errors rejected synchronously at the mutation boundary.
///
/// No partial mutation ever occurs: a mutator validates every referenced id
/// and value before touching the matrix. Data-sufficiency conditions
/// (unranked hypotheses, undefined diagnosticity) are not errors — they are
/// first-class result states on the analysis models.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    #[error("hypothesis {id} not found in matrix")]
    HypothesisNotFound { id: HypothesisId },

    #[error("evidence {id} not found in matrix")]
    EvidenceNotFound { id: EvidenceId },

    #[error("invalid rating code: {code:?} (expected CC, C, N, I, or II)")]
    InvalidRatingCode { code: String },

    #[error("invalid evidence weight: {value} (must be finite and >= 0)")]
    InvalidWeight { value: f64 },

    #[error("snapshot serialization failed: {reason}")]
    SerializationFailed { reason: String },

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}
