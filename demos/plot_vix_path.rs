// Example: plot_vix_path.rs
// Evaluates the expected-value model for a scenario preset, runs a Monte Carlo
// ensemble and draws one projected path on top of the 5%-95% VIX fan.
//
// Usage:
//     cargo run --example plot_vix_path -- [preset] [seed]
//
// The output image will be written to vix_path.svg in the working directory.

use std::env;
use std::error::Error;

use plotters::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use vix_lib::{
    default_configs, project_vix_path, run_monte_carlo, MonteCarloConfig, ScenarioPreset,
};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let preset: ScenarioPreset = match args.get(1) {
        Some(name) => name.parse()?,
        None => ScenarioPreset::Fear,
    };
    let seed: u64 = match args.get(2) {
        Some(s) => s.parse()?,
        None => 42,
    };

    // ---------------------------------------------------------------------
    // Model + ensemble
    // ---------------------------------------------------------------------
    let mut config = default_configs::reproducible();
    config.inputs = preset.inputs();
    config.seed = Some(seed);
    config.monte_carlo = MonteCarloConfig {
        paths: 2000,
        quantiles: vec![0.05, 0.5, 0.95],
        base_seed: seed,
    };

    let (outputs, bands) = run_monte_carlo(&config)?;
    println!("Preset: {}", preset);
    println!("  Expected VIX: {:.2}", outputs.expected_vix);
    println!("  Deviation:    {:.2} ({})", outputs.vix_deviation, outputs.sentiment);
    println!("  Future vol:   {:.2}%", outputs.future_vol);

    let mut rng = StdRng::seed_from_u64(seed);
    let (_, path) = project_vix_path(&config.inputs, config.noise_level, &mut rng)?;

    // ---------------------------------------------------------------------
    // Plot
    // ---------------------------------------------------------------------
    let lower = bands.vix_band(0.05).ok_or("missing 5% band")?;
    let upper = bands.vix_band(0.95).ok_or("missing 95% band")?;
    let median = bands.vix_band(0.5).ok_or("missing median band")?;

    let y_max = upper
        .iter()
        .chain(path.vix.iter())
        .fold(f64::NEG_INFINITY, |a, &b| a.max(b))
        * 1.1;
    let x_max = (path.len().max(2) - 1) as f64;

    let root = SVGBackend::new("vix_path.svg", (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!(
                "VIX and Volatility Projection for Next {} Days ({})",
                path.len(),
                preset
            ),
            ("sans-serif", 30),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Days Forward")
        .y_desc("Volatility Level (%)")
        .draw()?;

    // 5%-95% fan
    let mut fan = indexed(lower);
    fan.extend(indexed(upper).into_iter().rev());
    chart.draw_series(std::iter::once(Polygon::new(fan, RGBColor(255, 140, 0).mix(0.15))))?;

    chart
        .draw_series(std::iter::once(PathElement::new(
            indexed(median),
            RGBColor(255, 140, 0).stroke_width(1),
        )))?
        .label("Median VIX")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RGBColor(255, 140, 0)));

    chart
        .draw_series(std::iter::once(PathElement::new(
            indexed(&path.vix),
            RGBColor(255, 140, 0).stroke_width(3),
        )))?
        .label("Projected VIX Path")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RGBColor(255, 140, 0).stroke_width(3)));

    chart
        .draw_series(std::iter::once(PathElement::new(
            indexed(&path.vol),
            BLUE.stroke_width(2),
        )))?
        .label("Projected Realized Volatility Path")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    // Expected VIX level
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(0.0, outputs.expected_vix), (x_max, outputs.expected_vix)],
            GREEN,
        )))?
        .label("Expected VIX Level")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    println!("Chart saved to vix_path.svg");
    Ok(())
}

/// `(day, value)` points of a daily series
fn indexed(values: &[f64]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .map(|(d, v)| (d as f64, *v))
        .collect()
}
