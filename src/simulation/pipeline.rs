use rand::rngs::StdRng;
use rand::SeedableRng;
use statrs::statistics::{Data, OrderStatistics, Statistics};
use tracing::{debug, info};

use crate::error::{VixError, VixResult};
use crate::models::traits::PathSimulator;
use crate::simulation::config::MonteCarloConfig;
use crate::simulation::types::{EnsembleBands, SeriesStats, SimulatedPath};

/// Repeated simulation of one model with reproducible per-path seeds
pub struct MonteCarloProcess {
    model: Box<dyn PathSimulator>,
    config: MonteCarloConfig,
}

impl MonteCarloProcess {
    pub fn new(model: Box<dyn PathSimulator>, config: MonteCarloConfig) -> Self {
        Self { model, config }
    }

    /// Override the number of paths
    pub fn with_paths(mut self, paths: usize) -> Self {
        self.config.paths = paths;
        self
    }

    /// Runs every path and returns the raw ensemble.
    pub fn simulate_paths(&self) -> VixResult<Vec<SimulatedPath>> {
        self.config.validate()?;
        self.model.validate()?;
        simulate_ensemble(&*self.model, self.config.paths, self.config.base_seed)
    }

    /// Runs the ensemble and reduces it to per-day bands.
    pub fn run(&self) -> VixResult<EnsembleBands> {
        let paths = self.simulate_paths()?;
        summarize_ensemble(self.model.name(), &paths, &self.config.quantiles)
    }
}

/// Simulates `paths` paths, seeding path `k` with `base_seed + k`.
///
/// Each path owns its generator, so the result does not depend on the order
/// in which paths are evaluated.
pub fn simulate_ensemble(
    model: &dyn PathSimulator,
    paths: usize,
    base_seed: u64,
) -> VixResult<Vec<SimulatedPath>> {
    info!(
        model = model.name(),
        paths,
        horizon = model.horizon(),
        "running Monte Carlo ensemble"
    );

    (0..paths)
        .map(|k| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(k as u64));
            model.simulate(&mut rng)
        })
        .collect()
}

/// Per-day mean and quantiles across an ensemble of equal-length paths.
pub fn summarize_ensemble(
    model: &str,
    paths: &[SimulatedPath],
    quantile_levels: &[f64],
) -> VixResult<EnsembleBands> {
    let first = paths
        .first()
        .ok_or_else(|| VixError::invalid_parameter("cannot summarize an empty ensemble"))?;
    let horizon = first.len();
    if let Some(bad) = paths.iter().find(|p| p.len() != horizon) {
        return Err(VixError::LengthMismatch {
            axis: horizon,
            values: bad.len(),
        });
    }

    let mut vix_mean = Vec::with_capacity(horizon);
    let mut vol_mean = Vec::with_capacity(horizon);
    let mut vix_quantiles = vec![Vec::with_capacity(horizon); quantile_levels.len()];
    let mut vol_quantiles = vec![Vec::with_capacity(horizon); quantile_levels.len()];

    for day in 0..horizon {
        let vix_day: Vec<f64> = paths.iter().map(|p| p.vix[day]).collect();
        let vol_day: Vec<f64> = paths.iter().map(|p| p.vol[day]).collect();

        vix_mean.push(Statistics::mean(vix_day.iter()));
        vol_mean.push(Statistics::mean(vol_day.iter()));

        let mut vix_data = Data::new(vix_day);
        let mut vol_data = Data::new(vol_day);
        for (i, &q) in quantile_levels.iter().enumerate() {
            vix_quantiles[i].push(vix_data.quantile(q));
            vol_quantiles[i].push(vol_data.quantile(q));
        }
    }

    let terminal_vix: Vec<f64> = paths.iter().filter_map(|p| p.vix.last().copied()).collect();
    let terminal_vol: Vec<f64> = paths.iter().filter_map(|p| p.vol.last().copied()).collect();

    debug!(model, paths = paths.len(), horizon, "ensemble summarized");
    Ok(EnsembleBands {
        model: model.to_string(),
        paths: paths.len(),
        quantile_levels: quantile_levels.to_vec(),
        vix_mean,
        vol_mean,
        vix_quantiles,
        vol_quantiles,
        terminal_vix: SeriesStats::from_values(&terminal_vix),
        terminal_vol: SeriesStats::from_values(&terminal_vol),
    })
}
