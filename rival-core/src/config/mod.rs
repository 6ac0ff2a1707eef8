pub mod analysis_config;
pub mod defaults;

pub use analysis_config::AnalysisConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{MatrixError, MatrixResult};

/// Top-level configuration, loadable from a TOML document.
///
/// Missing sections and fields fall back to defaults, so an empty document
/// is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RivalConfig {
    pub analysis: AnalysisConfig,
}

impl RivalConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(input: &str) -> MatrixResult<Self> {
        toml::from_str(input).map_err(|e| MatrixError::InvalidConfig {
            reason: e.to_string(),
        })
    }
}
