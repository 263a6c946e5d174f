//! Model constants. Tradition is measured on a 0..100 scale.

/// Upper bound of the tradition scale.
pub const TRADITION_MAX: f64 = 100.0;

/// Fraction of tradition lost per year before decay reduction.
pub const DECAY_RATE: f64 = 0.05;

/// Largest decay reduction a parameter set may carry. At this value the
/// retention factor reaches 1.0 and tradition stops decaying at all.
pub const DECAY_REDUCTION_MAX: f64 = 0.05;

/// Two consecutive series values closer than this end the series.
pub const CONVERGENCE_EPSILON: f64 = 0.01;

/// Safety cap on series length. The fixed-point iteration converges within
/// a few hundred steps for every in-range parameter set; hitting this cap
/// means the inputs describe a divergent or oscillating series.
pub const MAX_SERIES_STEPS: usize = 100_000;

/// Number of pip outcome slots (outcomes 0..=17).
pub const PIP_OUTCOMES: usize = 18;

/// Faces on the base pip roll.
pub const BASE_ROLL_FACES: usize = 6;

/// Tradition levels that each unlock one Bernoulli +1 pass, scaled by how
/// far tradition exceeds them.
pub const SHIFT_THRESHOLDS: [f64; 5] = [0.0, 20.0, 40.0, 60.0, 80.0];

/// Probability of the final unconditional +1 pass.
pub const FINAL_SHIFT_PROB: f64 = 0.5;

/// Hard cap on total pips after bonuses.
pub const PIP_CAP: u32 = 24;
