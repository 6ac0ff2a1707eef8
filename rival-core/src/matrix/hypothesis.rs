use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::HypothesisId;

/// A candidate explanation being evaluated.
///
/// Display text may be edited freely after creation; edits never affect
/// scoring. Id and creation time are fixed for the life of the matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hypothesis {
    pub id: HypothesisId,
    pub text: String,
    /// When the hypothesis was added to the matrix.
    pub created_at: DateTime<Utc>,
}

impl Hypothesis {
    pub fn new(id: HypothesisId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            created_at: Utc::now(),
        }
    }
}
