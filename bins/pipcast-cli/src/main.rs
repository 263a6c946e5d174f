//! pipcast — renders tradition and leader pip forecast charts.
//!
//! One invocation is one synchronous compute-and-render pass: slider-style
//! value flags in, two PNG charts out, optionally with a JSON summary of
//! the forecast on stdout.

mod scene;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use pipcast_chart::{Pixmap, render};
use pipcast_model::{
    PipBonuses, PipDistribution, SimulationParams, max_pips, min_pips, threshold_pips,
};
use serde::Serialize;
use tracing::info;

/// Forecast military tradition decay and leader pips.
#[derive(Parser)]
#[command(name = "pipcast", version, about = "Forecast military tradition decay and leader pips.")]
struct Cli {
    /// Starting tradition level (0-100).
    #[arg(long, default_value_t = 20.0)]
    start: f64,

    /// Flat tradition gain per year.
    #[arg(long, default_value_t = 0.0)]
    gain: f64,

    /// Extra yearly gain for the variant scenario line.
    #[arg(long, default_value_t = 0.0)]
    variant_gain: f64,

    /// Tradition decay reduction (0-0.05).
    #[arg(long, default_value_t = 0.0)]
    decay_reduction: f64,

    /// Leader fire pips.
    #[arg(long, default_value_t = 0)]
    fire: u32,

    /// Leader shock pips.
    #[arg(long, default_value_t = 0)]
    shock: u32,

    /// Leader maneuver pips.
    #[arg(long, default_value_t = 0)]
    maneuver: u32,

    /// Leader siege pips.
    #[arg(long, default_value_t = 0)]
    siege: u32,

    /// Chart width in pixels.
    #[arg(long, default_value_t = 700)]
    width: u32,

    /// Chart height in pixels.
    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Directory the PNG charts are written into.
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Print a JSON summary of the forecast to stdout.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Summary<'a> {
    params: &'a SimulationParams,
    years_to_converge: usize,
    final_tradition: f64,
    min_pips: u32,
    median_pips: u32,
    max_pips: u32,
    tradition_chart: &'a Path,
    pip_chart: &'a Path,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let params = SimulationParams::new(
        cli.start,
        cli.gain,
        cli.variant_gain,
        cli.decay_reduction,
        PipBonuses::new(cli.fire, cli.shock, cli.maneuver, cli.siege),
    );

    let scene = scene::compose(&params).context("computing forecast")?;

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating {}", cli.out_dir.display()))?;
    let tradition_chart = cli.out_dir.join("tradition.png");
    let pip_chart = cli.out_dir.join("pips.png");

    let mut surface = Pixmap::new(cli.width, cli.height);
    render(&scene.tradition_lines, &mut surface, &scene::tradition_spec())
        .context("rendering tradition chart")?;
    surface
        .save_png(&tradition_chart)
        .with_context(|| format!("writing {}", tradition_chart.display()))?;

    render(&scene.pip_lines, &mut surface, &scene::pip_spec())
        .context("rendering pip chart")?;
    surface
        .save_png(&pip_chart)
        .with_context(|| format!("writing {}", pip_chart.display()))?;

    let final_tradition = scene.series.last().copied().unwrap_or(params.start);
    let median = params.bonuses.apply(threshold_pips(
        0.5,
        &PipDistribution::for_tradition(final_tradition),
    ) as u32);

    if cli.json {
        let summary = Summary {
            params: &params,
            years_to_converge: scene.series.len(),
            final_tradition,
            min_pips: min_pips(final_tradition, &params.bonuses),
            median_pips: median,
            max_pips: max_pips(final_tradition, &params.bonuses),
            tradition_chart: &tradition_chart,
            pip_chart: &pip_chart,
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        info!(
            years = scene.series.len(),
            final_tradition,
            min = min_pips(final_tradition, &params.bonuses),
            median,
            max = max_pips(final_tradition, &params.bonuses),
            "forecast complete"
        );
        println!("wrote {} and {}", tradition_chart.display(), pip_chart.display());
    }

    Ok(())
}
