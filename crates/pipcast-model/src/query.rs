//! Deterministic pip queries: bounds and threshold crossings.

use crate::constants::{SHIFT_THRESHOLDS, TRADITION_MAX};
use crate::distribution::PipDistribution;
use crate::params::PipBonuses;

/// Lowest possible pip total at a tradition level, assuming every
/// probabilistic step fails. Bonus-adjusted and capped.
pub fn min_pips(tradition: f64, bonuses: &PipBonuses) -> u32 {
    let t = tradition.clamp(0.0, TRADITION_MAX);
    let roll = 1 + (t / 20.0).floor() as u32 + (t / 100.0).floor() as u32;
    bonuses.apply(roll)
}

/// Highest possible pip total at a tradition level, assuming every
/// probabilistic step succeeds. Bonus-adjusted and capped.
pub fn max_pips(tradition: f64, bonuses: &PipBonuses) -> u32 {
    let t = tradition.clamp(0.0, TRADITION_MAX);
    let unlocked = SHIFT_THRESHOLDS.iter().filter(|&&bracket| t > bracket).count() as u32;
    let roll = 6 + (t / 20.0).floor() as u32 + unlocked + 1;
    bonuses.apply(roll)
}

/// First outcome whose inclusive cumulative mass strictly exceeds
/// `probability`; 0 when no prefix sum ever does.
///
/// The strict comparison and the 0 fallback are load-bearing: a threshold
/// at or above the distribution's total mass (e.g. 1.0) always falls
/// through to 0 rather than landing on the top outcome.
pub fn threshold_pips(probability: f64, dist: &PipDistribution) -> usize {
    let mut cumulative = 0.0;
    for (outcome, p) in dist.probabilities().iter().enumerate() {
        cumulative += p;
        if cumulative > probability {
            return outcome;
        }
    }
    0
}

/// Threshold crossing for each distribution in a series, bonus-adjusted.
pub fn threshold_series(
    probability: f64,
    dists: &[PipDistribution],
    bonuses: &PipBonuses,
) -> Vec<u32> {
    dists
        .iter()
        .map(|dist| bonuses.apply(threshold_pips(probability, dist) as u32))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::distribution_series;
    use proptest::prelude::*;

    #[test]
    fn min_pips_at_key_levels() {
        let none = PipBonuses::default();
        assert_eq!(min_pips(0.0, &none), 1);
        assert_eq!(min_pips(20.0, &none), 2);
        assert_eq!(min_pips(99.0, &none), 5);
        assert_eq!(min_pips(100.0, &none), 7);
    }

    #[test]
    fn max_pips_at_key_levels() {
        let none = PipBonuses::default();
        assert_eq!(max_pips(0.0, &none), 7);
        assert_eq!(max_pips(10.0, &none), 8);
        assert_eq!(max_pips(100.0, &none), 17);
    }

    #[test]
    fn zero_threshold_returns_first_supported_outcome() {
        let dist = PipDistribution::for_tradition(40.0);
        let first = dist
            .probabilities()
            .iter()
            .position(|&p| p > 0.0)
            .unwrap();
        assert_eq!(threshold_pips(0.0, &dist), first);
    }

    #[test]
    fn full_threshold_falls_through_to_zero() {
        // Cumulative mass never strictly exceeds 1.0, so the query lands on
        // the fallback. Requesting the 100th percentile yields the sentinel.
        let dist = PipDistribution::for_tradition(60.0);
        assert_eq!(threshold_pips(1.0, &dist), 0);
        assert_eq!(threshold_pips(2.0, &dist), 0);
    }

    #[test]
    fn threshold_series_applies_bonuses() {
        let dists = distribution_series(&[0.0, 50.0]);
        let bonuses = PipBonuses::new(2, 0, 0, 1);
        let plain = threshold_series(0.5, &dists, &PipBonuses::default());
        let boosted = threshold_series(0.5, &dists, &bonuses);
        for (p, b) in plain.iter().zip(&boosted) {
            assert_eq!(p + 3, *b);
        }
    }

    proptest! {
        #[test]
        fn min_never_exceeds_max(tradition in 0.0f64..=100.0) {
            let none = PipBonuses::default();
            let min = min_pips(tradition, &none);
            let max = max_pips(tradition, &none);
            prop_assert!(min <= max);
            prop_assert!(max <= 24);
        }

        #[test]
        fn threshold_lies_between_bounds(
            tradition in 0.0f64..=100.0,
            probability in 0.0f64..0.999,
        ) {
            let none = PipBonuses::default();
            let dist = PipDistribution::for_tradition(tradition);
            let crossing = threshold_pips(probability, &dist) as u32;
            prop_assert!(crossing >= min_pips(tradition, &none));
            prop_assert!(crossing <= max_pips(tradition, &none));
        }

        #[test]
        fn threshold_is_monotone_in_probability(
            tradition in 0.0f64..=100.0,
            a in 0.0f64..0.999,
            b in 0.0f64..0.999,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let dist = PipDistribution::for_tradition(tradition);
            prop_assert!(threshold_pips(lo, &dist) <= threshold_pips(hi, &dist));
        }
    }
}
