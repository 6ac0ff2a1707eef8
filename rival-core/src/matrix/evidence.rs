use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::EvidenceId;
use super::weight::Weight;

/// Opaque locator into a source corpus (document id, URL, citation key).
/// The engine never interprets it; it travels with the evidence for
/// export and UI collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceRef(pub String);

impl SourceRef {
    pub fn new(locator: impl Into<String>) -> Self {
        Self(locator.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An observed fact used to test hypotheses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    pub id: EvidenceId,
    pub text: String,
    /// Credibility weight applied to every score this evidence touches.
    #[serde(default)]
    pub weight: Weight,
    /// Optional link back to the source corpus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_ref: Option<SourceRef>,
    /// When the evidence was added to the matrix.
    pub created_at: DateTime<Utc>,
}

impl Evidence {
    pub fn new(id: EvidenceId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            weight: Weight::ONE,
            source_ref: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_source_ref(mut self, source_ref: SourceRef) -> Self {
        self.source_ref = Some(source_ref);
        self
    }
}
