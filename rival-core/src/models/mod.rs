pub mod diagnosticity;
pub mod ranking;
pub mod report;
pub mod sensitivity;
pub mod suggestion;

pub use diagnosticity::{Diagnosticity, DiagnosticityBand, EvidenceDiagnosticity};
pub use ranking::{RankedHypothesis, Ranking, TieBreakDecision, TieBreakRule};
pub use report::AnalysisReport;
pub use sensitivity::{EvidenceSensitivity, Scenario, ScenarioOutcome, SensitivityReport};
pub use suggestion::{
    EvidenceSuggestion, HypothesisSuggestion, RatingSuggestion, SuggestionContext,
};
