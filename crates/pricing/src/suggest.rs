use serde::{Deserialize, Serialize};

/// Five candidate price points for one of our variants, each rounded to two
/// decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSuggestion {
    pub undercut_lower: f64,
    pub undercut_avg: f64,
    pub lowest_price_match: f64,
    pub slight_premium: f64,
    pub premium: f64,
}

/// Round to two decimal places, half away from zero (standard currency
/// rounding).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Derive suggested price points from matched competitor prices.
///
/// With no competitor prices the suggestion is a no-op: every field equals the
/// current price, rounded. Callers filter out non-finite and non-positive
/// competitor prices before calling, so the output is never NaN for finite
/// non-negative input.
pub fn suggest_prices(our_price: f64, competitor_prices: &[f64]) -> PriceSuggestion {
    if competitor_prices.is_empty() {
        let keep = round2(our_price);
        return PriceSuggestion {
            undercut_lower: keep,
            undercut_avg: keep,
            lowest_price_match: keep,
            slight_premium: keep,
            premium: keep,
        };
    }

    let avg = competitor_prices.iter().sum::<f64>() / competitor_prices.len() as f64;
    let min = competitor_prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = competitor_prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    PriceSuggestion {
        undercut_lower: round2(min * 0.95),
        undercut_avg: round2(avg * 0.95),
        lowest_price_match: round2(min),
        slight_premium: round2(avg * 1.10),
        premium: round2(max * 1.05),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_is_half_away_from_zero() {
        assert_eq!(round2(1.005000001), 1.01);
        assert_eq!(round2(2.675000001), 2.68);
        assert_eq!(round2(1.004), 1.0);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn no_competitor_prices_keeps_current_price() {
        let suggestion = suggest_prices(50.0, &[]);
        assert_eq!(suggestion.undercut_lower, 50.0);
        assert_eq!(suggestion.undercut_avg, 50.0);
        assert_eq!(suggestion.lowest_price_match, 50.0);
        assert_eq!(suggestion.slight_premium, 50.0);
        assert_eq!(suggestion.premium, 50.0);
    }

    #[test]
    fn suggestion_arithmetic() {
        let suggestion = suggest_prices(50.0, &[40.0, 60.0]);
        assert_eq!(suggestion.lowest_price_match, 40.0);
        assert_eq!(suggestion.undercut_lower, 38.0);
        assert_eq!(suggestion.undercut_avg, 47.5);
        assert_eq!(suggestion.slight_premium, 55.0);
        assert_eq!(suggestion.premium, 63.0);
    }

    #[test]
    fn single_competitor_price_drives_all_bands() {
        let suggestion = suggest_prices(10.0, &[20.0]);
        assert_eq!(suggestion.lowest_price_match, 20.0);
        assert_eq!(suggestion.undercut_lower, 19.0);
        assert_eq!(suggestion.undercut_avg, 19.0);
        assert_eq!(suggestion.slight_premium, 22.0);
        assert_eq!(suggestion.premium, 21.0);
    }

    #[test]
    fn outputs_are_rounded_to_two_decimals() {
        let suggestion = suggest_prices(9.99, &[9.99, 10.01, 10.03]);
        for value in [
            suggestion.undercut_lower,
            suggestion.undercut_avg,
            suggestion.lowest_price_match,
            suggestion.slight_premium,
            suggestion.premium,
        ] {
            assert_eq!(round2(value), value, "not two-decimal: {value}");
        }
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let json = serde_json::to_value(suggest_prices(50.0, &[40.0, 60.0])).unwrap();
        assert_eq!(json["undercut_lower"], 38.0);
        assert_eq!(json["lowest_price_match"], 40.0);
        assert_eq!(json["premium"], 63.0);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn prices() -> impl Strategy<Value = Vec<f64>> {
            proptest::collection::vec(0.01f64..100_000.0, 0..16)
        }

        proptest! {
            /// Property: all five outputs are finite and non-negative for
            /// finite non-negative inputs.
            #[test]
            fn outputs_are_finite_and_non_negative(
                our_price in 0.0f64..100_000.0,
                competitor_prices in prices(),
            ) {
                let s = suggest_prices(our_price, &competitor_prices);
                for value in [s.undercut_lower, s.undercut_avg, s.lowest_price_match, s.slight_premium, s.premium] {
                    prop_assert!(value.is_finite());
                    prop_assert!(value >= 0.0);
                }
            }

            /// Property: matching the lowest price never exceeds the premium
            /// band.
            #[test]
            fn lowest_match_never_exceeds_premium(
                our_price in 0.0f64..100_000.0,
                competitor_prices in prices(),
            ) {
                let s = suggest_prices(our_price, &competitor_prices);
                prop_assert!(s.lowest_price_match <= s.premium + 1e-9);
                prop_assert!(s.undercut_lower <= s.lowest_price_match + 1e-9);
            }

            /// Property: the empty-input fallback pins every band to the
            /// rounded current price.
            #[test]
            fn empty_input_is_a_no_op(our_price in 0.0f64..100_000.0) {
                let s = suggest_prices(our_price, &[]);
                let keep = round2(our_price);
                prop_assert_eq!(s.undercut_lower, keep);
                prop_assert_eq!(s.undercut_avg, keep);
                prop_assert_eq!(s.lowest_price_match, keep);
                prop_assert_eq!(s.slight_premium, keep);
                prop_assert_eq!(s.premium, keep);
            }
        }
    }
}
