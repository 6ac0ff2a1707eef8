use crate::models::{
    EvidenceSuggestion, HypothesisSuggestion, RatingSuggestion, SuggestionContext,
};

/// AI-assisted suggestion capability, injected into the surrounding
/// workflow by the host — never into the scoring core.
///
/// The engines stay deterministic and independently testable: they never
/// call this trait. Suggested ratings reach the matrix only when a caller
/// commits them via the normal mutation API.
pub trait Suggester: Send + Sync {
    /// Propose additional candidate explanations.
    fn suggest_hypotheses(&self, ctx: SuggestionContext<'_>) -> Vec<HypothesisSuggestion>;

    /// Propose additional evidence worth rating.
    fn suggest_evidence(&self, ctx: SuggestionContext<'_>) -> Vec<EvidenceSuggestion>;

    /// Propose ratings for unrated cells.
    fn suggest_ratings(&self, ctx: SuggestionContext<'_>) -> Vec<RatingSuggestion>;
}
