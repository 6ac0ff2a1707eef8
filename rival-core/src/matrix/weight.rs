use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::errors::MatrixError;

/// Evidence credibility weight, fixed-point in hundredths.
///
/// `Weight::ONE` (1.00) is the default and leaves scoring unchanged;
/// 0 makes the evidence a scoring no-op while it stays listed. Scores stay
/// exact integers because every contribution is `hundredths × rating`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Weight(u32);

impl Weight {
    /// The neutral weight (1.00).
    pub const ONE: Weight = Weight(100);
    /// A weight that removes the evidence from scoring.
    pub const ZERO: Weight = Weight(0);

    /// Create a weight from a fractional value, rejecting negative or
    /// non-finite input.
    pub fn new(value: f64) -> Result<Self, MatrixError> {
        if !value.is_finite() || value < 0.0 {
            return Err(MatrixError::InvalidWeight { value });
        }
        Ok(Self((value * 100.0).round() as u32))
    }

    /// Create a weight directly from hundredths.
    pub fn from_hundredths(hundredths: u32) -> Self {
        Self(hundredths)
    }

    /// Raw fixed-point value in hundredths.
    pub fn hundredths(self) -> u32 {
        self.0
    }

    /// The fractional value this weight represents.
    pub fn value(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Accumulated inconsistency score, fixed-point in hundredths.
///
/// Lower is better: the ranking sorts ascending. Always non-negative since
/// only the inconsistent half of the rating scale contributes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Score(i64);

impl Score {
    pub const ZERO: Score = Score(0);

    /// The contribution of one rated cell: `weight × max(0, numeric)`.
    pub fn contribution(weight: Weight, inconsistency: u8) -> Self {
        Self(i64::from(weight.hundredths()) * i64::from(inconsistency))
    }

    /// Raw fixed-point value in hundredths.
    pub fn hundredths(self) -> i64 {
        self.0
    }

    /// The fractional value this score represents.
    pub fn value(self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Score {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Score {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, (self.0 % 100).abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_rejects_negative_and_non_finite() {
        assert!(Weight::new(-0.5).is_err());
        assert!(Weight::new(f64::NAN).is_err());
        assert!(Weight::new(f64::INFINITY).is_err());
        assert_eq!(Weight::new(1.0).unwrap(), Weight::ONE);
        assert_eq!(Weight::new(0.0).unwrap(), Weight::ZERO);
    }

    #[test]
    fn score_contribution_is_exact() {
        // 1.50 weight × very inconsistent (2) = 3.00
        let w = Weight::new(1.5).unwrap();
        assert_eq!(Score::contribution(w, 2).hundredths(), 300);
        assert_eq!(Score::contribution(Weight::ZERO, 2), Score::ZERO);
    }

    #[test]
    fn display_formats_as_decimal() {
        assert_eq!(Weight::new(0.25).unwrap().to_string(), "0.25");
        assert_eq!(Score::contribution(Weight::ONE, 2).to_string(), "2.00");
    }
}
