use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::MatrixError;

/// Ordinal consistency judgment of one evidence item against one hypothesis.
///
/// Symmetric around [`Rating::Neutral`]: the consistent half carries negative
/// numeric values, the inconsistent half positive ones. Only the positive
/// half contributes to inconsistency scores. A cell with no rating at all is
/// represented by absence from the rating map, not by a variant here —
/// "not yet rated" and Neutral are different states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    VeryConsistent,
    Consistent,
    Neutral,
    Inconsistent,
    VeryInconsistent,
}

impl Rating {
    /// All levels in scale order, most consistent first.
    pub const ALL: [Rating; 5] = [
        Rating::VeryConsistent,
        Rating::Consistent,
        Rating::Neutral,
        Rating::Inconsistent,
        Rating::VeryInconsistent,
    ];

    /// Numeric value on the −2..=2 scale.
    pub fn numeric(self) -> i8 {
        match self {
            Self::VeryConsistent => -2,
            Self::Consistent => -1,
            Self::Neutral => 0,
            Self::Inconsistent => 1,
            Self::VeryInconsistent => 2,
        }
    }

    /// Analyst shorthand code (CC, C, N, I, II).
    pub fn code(self) -> &'static str {
        match self {
            Self::VeryConsistent => "CC",
            Self::Consistent => "C",
            Self::Neutral => "N",
            Self::Inconsistent => "I",
            Self::VeryInconsistent => "II",
        }
    }

    /// Parse an analyst shorthand code.
    pub fn from_code(code: &str) -> Result<Self, MatrixError> {
        match code {
            "CC" => Ok(Self::VeryConsistent),
            "C" => Ok(Self::Consistent),
            "N" => Ok(Self::Neutral),
            "I" => Ok(Self::Inconsistent),
            "II" => Ok(Self::VeryInconsistent),
            other => Err(MatrixError::InvalidRatingCode {
                code: other.to_string(),
            }),
        }
    }

    /// Reflect the rating about Neutral (numeric value negated).
    /// Used by the inversion perturbation scenario.
    pub fn inverted(self) -> Self {
        match self {
            Self::VeryConsistent => Self::VeryInconsistent,
            Self::Consistent => Self::Inconsistent,
            Self::Neutral => Self::Neutral,
            Self::Inconsistent => Self::Consistent,
            Self::VeryInconsistent => Self::VeryConsistent,
        }
    }

    /// Whether this level sits on the inconsistent (scoring) half of the scale.
    pub fn is_inconsistent(self) -> bool {
        self.numeric() > 0
    }

    /// Whether this level sits on the consistent (support) half of the scale.
    pub fn is_consistent(self) -> bool {
        self.numeric() < 0
    }

    /// The inconsistency contribution of this level: `max(0, numeric)`.
    pub fn inconsistency(self) -> u8 {
        self.numeric().max(0) as u8
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_values_are_symmetric_around_neutral() {
        for level in Rating::ALL {
            assert_eq!(level.numeric(), -level.inverted().numeric());
        }
        assert_eq!(Rating::Neutral.inverted(), Rating::Neutral);
    }

    #[test]
    fn inversion_is_an_involution() {
        for level in Rating::ALL {
            assert_eq!(level.inverted().inverted(), level);
        }
    }

    #[test]
    fn codes_round_trip() {
        for level in Rating::ALL {
            assert_eq!(Rating::from_code(level.code()).unwrap(), level);
        }
        assert!(Rating::from_code("X").is_err());
    }

    #[test]
    fn only_the_inconsistent_half_scores() {
        assert_eq!(Rating::VeryConsistent.inconsistency(), 0);
        assert_eq!(Rating::Consistent.inconsistency(), 0);
        assert_eq!(Rating::Neutral.inconsistency(), 0);
        assert_eq!(Rating::Inconsistent.inconsistency(), 1);
        assert_eq!(Rating::VeryInconsistent.inconsistency(), 2);
    }
}
