//! Scene composition: from simulation parameters to chart line sets.
//!
//! One pass produces the tool's two charts: tradition over time (base
//! scenario in grey, variant-gain scenario on top), and the
//! leader pip forecast as a fan of probability threshold lines between the
//! deterministic min/max bound lines.

use pipcast_chart::{ChartLine, ChartSpec, Rgb};
use pipcast_model::{
    ModelError, SimulationParams, distribution_series, max_pips, min_pips, threshold_series,
    tradition_series,
};

/// Probability fan resolution: thresholds 0.00, 0.05, ... 1.00.
const THRESHOLD_STEPS: usize = 20;

/// Both chart line sets plus the underlying series, computed in one pass.
pub struct Scene {
    pub tradition_lines: Vec<ChartLine>,
    pub pip_lines: Vec<ChartLine>,
    pub series: Vec<f64>,
    pub variant_series: Vec<f64>,
}

pub fn tradition_spec() -> ChartSpec {
    ChartSpec {
        x_increment: 10,
        y_max: 100.0,
        y_increment: 10.0,
        x_label: "Years".into(),
        y_label: "Military Tradition".into(),
    }
}

pub fn pip_spec() -> ChartSpec {
    ChartSpec {
        x_increment: 10,
        y_max: 24.0,
        y_increment: 1.0,
        x_label: "Years".into(),
        y_label: "Leader Pips".into(),
    }
}

pub fn compose(params: &SimulationParams) -> Result<Scene, ModelError> {
    let series = tradition_series(params.start, params.gain, params.decay_reduction)?;
    let variant_series = tradition_series(
        params.start,
        params.gain + params.variant_gain,
        params.decay_reduction,
    )?;

    let tradition_lines = vec![
        ChartLine::styled(series.clone(), Rgb::GREY, 1.0),
        ChartLine::new(variant_series.clone()),
    ];

    let dists = distribution_series(&series);
    let mut pip_lines = Vec::with_capacity(THRESHOLD_STEPS + 3);
    for step in 0..=THRESHOLD_STEPS {
        let probability = step as f64 / THRESHOLD_STEPS as f64;
        let values = threshold_series(probability, &dists, &params.bonuses)
            .into_iter()
            .map(f64::from)
            .collect();
        pip_lines.push(ChartLine::styled(
            values,
            fan_color(probability),
            fan_width(probability),
        ));
    }
    for bound in [min_pips, max_pips] {
        let values = series
            .iter()
            .map(|&t| f64::from(bound(t, &params.bonuses)))
            .collect();
        pip_lines.push(ChartLine::styled(values, Rgb::WHITE, 1.0));
    }

    Ok(Scene { tradition_lines, pip_lines, series, variant_series })
}

/// Red at improbable thresholds shading to green at certain ones.
fn fan_color(probability: f64) -> Rgb {
    Rgb(
        (255.0 * (1.0 - probability)).round() as u8,
        (255.0 * probability).round() as u8,
        0,
    )
}

/// Widest in the middle of the fan, hairline at the extremes.
fn fan_width(probability: f64) -> f32 {
    (4.0 - (8.0 * probability - 4.0).abs()) as f32
}
