//! # pipcast-model
//! Tradition decay series and leader pip probability model.
//!
//! Military tradition decays by 5% per year, offset by flat gains and decay
//! reduction, and converges toward a fixed point. A leader generated at a
//! given tradition level rolls pips from a discrete distribution shaped by
//! that level. This crate computes the series, the exact per-year outcome
//! distributions, and deterministic queries over them (bounds and
//! percentile-style threshold crossings).

pub mod constants;
pub mod distribution;
pub mod error;
pub mod params;
pub mod query;
pub mod series;

pub use distribution::{PipDistribution, distribution_series};
pub use error::ModelError;
pub use params::{PipBonuses, SimulationParams};
pub use query::{max_pips, min_pips, threshold_pips, threshold_series};
pub use series::tradition_series;
