//! # rival-analysis
//!
//! The ACH analysis engines. All of them are pure, deterministic functions
//! of an immutable [`MatrixSnapshot`](rival_core::MatrixSnapshot) and an
//! [`AnalysisConfig`](rival_core::AnalysisConfig):
//!
//! - **scoring** — per-hypothesis inconsistency score and the ranked
//!   conclusion with its 3-stage tie-break
//! - **diagnosticity** — per-evidence discriminating-power classification
//! - **sensitivity** — exclusion/inversion perturbation scenarios and
//!   critical-evidence flagging
//! - **report** — the single structured result for export collaborators
//!
//! A snapshot that ranks successfully also sensitivity-analyzes
//! successfully: nothing here returns an error for a structurally valid
//! matrix, and data-sufficiency states are carried in the results.

pub mod diagnosticity;
pub mod engine;
pub mod report;
pub mod scoring;
pub mod sensitivity;

pub use engine::AnalysisEngine;
