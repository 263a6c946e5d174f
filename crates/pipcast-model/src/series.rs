//! Tradition series generation.
//!
//! A tradition level retains `1 - 0.05 + decay_reduction` of itself each
//! year, gains a flat amount, and is capped at 100. The series runs until
//! two consecutive values agree within [`CONVERGENCE_EPSILON`], so its
//! length depends on the inputs rather than being fixed in advance.

use tracing::warn;

use crate::constants::{CONVERGENCE_EPSILON, DECAY_RATE, MAX_SERIES_STEPS, TRADITION_MAX};
use crate::error::ModelError;

/// Yearly tradition values from `start` until convergence.
///
/// The first element is always `start` itself. Returns
/// [`ModelError::DidNotConverge`] if [`MAX_SERIES_STEPS`] transitions pass
/// without two consecutive values meeting the tolerance, which only happens
/// for out-of-range inputs (retention above 1.0 with a value diverging below
/// the cap, or negative values growing without bound).
pub fn tradition_series(
    start: f64,
    gain: f64,
    decay_reduction: f64,
) -> Result<Vec<f64>, ModelError> {
    let retention = 1.0 - DECAY_RATE + decay_reduction;
    let mut series = vec![start];
    let mut prev = start;

    for _ in 0..MAX_SERIES_STEPS {
        let current = (prev * retention + gain).min(TRADITION_MAX);
        series.push(current);
        if (current - prev).abs() < CONVERGENCE_EPSILON {
            return Ok(series);
        }
        prev = current;
    }

    warn!(
        start,
        gain,
        decay_reduction,
        steps = MAX_SERIES_STEPS,
        "tradition series did not converge"
    );
    Err(ModelError::DidNotConverge { steps: MAX_SERIES_STEPS })
}
