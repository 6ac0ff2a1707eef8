//! Property tests for the scale and fixed-point arithmetic.

use proptest::prelude::*;

use rival_core::matrix::{Rating, Score, Weight};

fn rating_strategy() -> impl Strategy<Value = Rating> {
    prop::sample::select(Rating::ALL.to_vec())
}

proptest! {
    /// Inversion negates the numeric value and is its own inverse.
    #[test]
    fn inversion_negates_and_round_trips(level in rating_strategy()) {
        prop_assert_eq!(level.inverted().numeric(), -level.numeric());
        prop_assert_eq!(level.inverted().inverted(), level);
    }

    /// Valid fractional weights survive the fixed-point conversion to
    /// within half a hundredth.
    #[test]
    fn weight_fixed_point_is_within_half_a_hundredth(value in 0.0_f64..1000.0) {
        let weight = Weight::new(value).unwrap();
        prop_assert!((weight.value() - value).abs() <= 0.005);
    }

    /// Score contributions are exact products and never negative.
    #[test]
    fn score_contribution_is_exact_and_non_negative(
        hundredths in 0u32..100_000,
        level in rating_strategy()
    ) {
        let weight = Weight::from_hundredths(hundredths);
        let score = Score::contribution(weight, level.inconsistency());
        prop_assert!(score >= Score::ZERO);
        prop_assert_eq!(
            score.hundredths(),
            i64::from(hundredths) * i64::from(level.inconsistency())
        );
    }
}
