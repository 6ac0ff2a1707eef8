use serde::{Deserialize, Serialize};

use crate::matrix::{EvidenceId, HypothesisId, MatrixSnapshot, Rating, SourceRef};

/// What a suggestion collaborator sees: the current matrix, read-only.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionContext<'a> {
    pub snapshot: &'a MatrixSnapshot,
}

/// Candidate hypothesis from a suggestion collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HypothesisSuggestion {
    pub text: String,
    /// Display-only rationale; never used for scoring.
    pub justification: String,
}

/// Candidate evidence from a suggestion collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceSuggestion {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_ref: Option<SourceRef>,
    /// Display-only rationale; never used for scoring.
    pub justification: String,
}

/// Candidate rating from a suggestion collaborator.
///
/// Carries the same five-level scale as a committed rating. Once a caller
/// commits it through the matrix mutation API it is indistinguishable from
/// a human rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingSuggestion {
    pub evidence_id: EvidenceId,
    pub hypothesis_id: HypothesisId,
    pub level: Rating,
    /// Display-only confidence/justification; never used for scoring.
    pub justification: String,
}
