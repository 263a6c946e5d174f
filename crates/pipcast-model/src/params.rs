//! Simulation parameters.
//!
//! One clamped value struct per compute-and-render pass. Clamping happens
//! here at the input boundary so the math below never sees out-of-range
//! values.

use serde::{Deserialize, Serialize};

use crate::constants::{DECAY_REDUCTION_MAX, PIP_CAP, TRADITION_MAX};

/// Flat pip bonuses from the four leader skill categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipBonuses {
    pub fire: u32,
    pub shock: u32,
    pub maneuver: u32,
    pub siege: u32,
}

impl PipBonuses {
    pub fn new(fire: u32, shock: u32, maneuver: u32, siege: u32) -> Self {
        Self { fire, shock, maneuver, siege }
    }

    /// Sum of all four categories.
    pub fn total(&self) -> u32 {
        self.fire + self.shock + self.maneuver + self.siege
    }

    /// Adds the bonuses to a rolled pip count, capping at [`PIP_CAP`].
    pub fn apply(&self, roll: u32) -> u32 {
        (self.total() + roll).min(PIP_CAP)
    }
}

/// Full input set for one forecasting pass.
///
/// `variant_gain` is extra yearly gain applied only to the second scenario
/// line on the tradition chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    pub start: f64,
    pub gain: f64,
    pub variant_gain: f64,
    pub decay_reduction: f64,
    pub bonuses: PipBonuses,
}

impl SimulationParams {
    /// Builds a parameter set, clamping every field to its slider range.
    pub fn new(
        start: f64,
        gain: f64,
        variant_gain: f64,
        decay_reduction: f64,
        bonuses: PipBonuses,
    ) -> Self {
        Self {
            start: start.clamp(0.0, TRADITION_MAX),
            gain: gain.max(0.0),
            variant_gain: variant_gain.max(0.0),
            decay_reduction: decay_reduction.clamp(0.0, DECAY_REDUCTION_MAX),
            bonuses,
        }
    }
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self::new(20.0, 0.0, 0.0, 0.0, PipBonuses::default())
    }
}
