//! # rival-core
//!
//! Foundation crate for the Rival ACH engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod matrix;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{AnalysisConfig, RivalConfig};
pub use errors::{MatrixError, MatrixResult};
pub use matrix::{
    Evidence, EvidenceId, Hypothesis, HypothesisId, MatrixId, MatrixSnapshot, Rating, RatingCell,
    Score, SourceRef, Weight,
};
pub use models::{AnalysisReport, Diagnosticity, DiagnosticityBand, Ranking};
