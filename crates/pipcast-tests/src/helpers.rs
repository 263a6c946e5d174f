//! Helpers shared across Pipcast integration tests.

use pipcast_chart::{ChartLine, ChartSpec, Rgb};
use pipcast_model::{
    PipBonuses, SimulationParams, distribution_series, max_pips, min_pips, threshold_series,
    tradition_series,
};

/// Axis frame of the tradition chart.
pub fn tradition_spec() -> ChartSpec {
    ChartSpec {
        x_increment: 10,
        y_max: 100.0,
        y_increment: 10.0,
        x_label: "Years".into(),
        y_label: "Military Tradition".into(),
    }
}

/// Axis frame of the pip forecast chart.
pub fn pip_spec() -> ChartSpec {
    ChartSpec {
        x_increment: 10,
        y_max: 24.0,
        y_increment: 1.0,
        x_label: "Years".into(),
        y_label: "Leader Pips".into(),
    }
}

/// Full forecast pipeline for one parameter set: the tradition series plus
/// the pip chart's threshold fan and bound lines.
pub fn forecast_lines(params: &SimulationParams) -> (Vec<f64>, Vec<ChartLine>) {
    let series = tradition_series(params.start, params.gain, params.decay_reduction)
        .expect("in-range parameters converge");
    let dists = distribution_series(&series);

    let mut lines = Vec::new();
    for step in 0..=20 {
        let probability = step as f64 / 20.0;
        let values = threshold_series(probability, &dists, &params.bonuses)
            .into_iter()
            .map(f64::from)
            .collect();
        lines.push(ChartLine::styled(values, Rgb::GREY, 2.0));
    }
    for bound in [min_pips, max_pips] {
        let values = series
            .iter()
            .map(|&t| f64::from(bound(t, &params.bonuses)))
            .collect();
        lines.push(ChartLine::styled(values, Rgb::WHITE, 1.0));
    }
    (series, lines)
}

/// Parameter set with every slider pushed to its upper stop.
pub fn maxed_params() -> SimulationParams {
    SimulationParams::new(100.0, 10.0, 5.0, 0.05, PipBonuses::new(6, 6, 6, 6))
}
