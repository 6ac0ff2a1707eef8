pub mod evidence;
pub mod hypothesis;
pub mod ids;
pub mod rating;
pub mod snapshot;
pub mod weight;

pub use evidence::{Evidence, SourceRef};
pub use hypothesis::Hypothesis;
pub use ids::{EvidenceId, HypothesisId, MatrixId};
pub use rating::Rating;
pub use snapshot::{MatrixSnapshot, RatingCell};
pub use weight::{Score, Weight};
