//! Pip outcome distributions.
//!
//! A leader rolls a six-face base die offset by `1 + floor(tradition/20)`,
//! then a series of independent Bernoulli +1 chances: one per tradition
//! bracket (with probability scaled by how far tradition exceeds the
//! bracket) and one unconditional coin flip. Rather than sampling, the
//! distribution is carried exactly as a probability mass function over the
//! 18 possible outcomes.

use rand::Rng;
use serde::Serialize;

use crate::constants::{
    BASE_ROLL_FACES, FINAL_SHIFT_PROB, PIP_OUTCOMES, SHIFT_THRESHOLDS, TRADITION_MAX,
};

/// Discrete probability mass function over pip outcomes `0..=17`.
///
/// Sums to 1 within floating-point tolerance for every tradition level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipDistribution {
    probs: [f64; PIP_OUTCOMES],
}

impl PipDistribution {
    /// Exact pip outcome distribution for a tradition level.
    ///
    /// `tradition` is clamped to `[0, 100]`; range enforcement belongs at
    /// the input boundary, not deep in the computation.
    pub fn for_tradition(tradition: f64) -> Self {
        let t = tradition.clamp(0.0, TRADITION_MAX);

        let offset = 1 + (t / 20.0).floor() as usize;
        let mut probs = [0.0; PIP_OUTCOMES];
        for slot in probs.iter_mut().skip(offset).take(BASE_ROLL_FACES) {
            *slot = 1.0 / BASE_ROLL_FACES as f64;
        }

        let mut dist = Self { probs };
        for threshold in SHIFT_THRESHOLDS {
            dist = dist.shifted((t - threshold).max(0.0) / 100.0);
        }
        dist.shifted(FINAL_SHIFT_PROB)
    }

    /// One Bernoulli +1 pass: each outcome keeps its mass with probability
    /// `1 - prob` and passes it one slot up with probability `prob`. Mass
    /// shifted past the top slot would be lost, but no reachable input
    /// pushes anything there.
    pub fn shifted(&self, prob: f64) -> Self {
        let mut probs = [0.0; PIP_OUTCOMES];
        probs[0] = self.probs[0] * (1.0 - prob);
        for i in 1..PIP_OUTCOMES {
            probs[i] = self.probs[i] * (1.0 - prob) + self.probs[i - 1] * prob;
        }
        Self { probs }
    }

    /// The full mass function, indexed by outcome.
    pub fn probabilities(&self) -> &[f64; PIP_OUTCOMES] {
        &self.probs
    }

    /// Mass at one outcome slot; zero outside `0..=17`.
    pub fn mass(&self, outcome: usize) -> f64 {
        self.probs.get(outcome).copied().unwrap_or(0.0)
    }

    /// Draws one outcome by inverse transform sampling.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let target = rng.gen_range(0.0..1.0);
        let mut cumulative = 0.0;
        for (outcome, p) in self.probs.iter().enumerate() {
            cumulative += p;
            if target < cumulative {
                return outcome;
            }
        }
        PIP_OUTCOMES - 1
    }
}

/// One outcome distribution per entry of a tradition series.
pub fn distribution_series(series: &[f64]) -> Vec<PipDistribution> {
    series
        .iter()
        .map(|&t| PipDistribution::for_tradition(t))
        .collect()
}
