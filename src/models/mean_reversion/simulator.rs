// src/models/mean_reversion/simulator.rs

//! Discrete mean-reverting projection of realized volatility and the VIX.
//!
//! Each day realized volatility moves a fixed fraction of the way towards the
//! long-run level and receives proportional Gaussian noise. The VIX then sits
//! on top of the new volatility with a noisy premium:
//!
//! ```text
//! vol[i] = max(5, vol[i-1] + speed * (level - vol[i-1]) + noise * vol[i-1] * z1)
//! vix[i] = max(5, vol[i] + 3.5 + 0.2 * z2 + noise * vix[i-1] * z3)
//! ```
//!
//! The three standard normal draws are taken in the order `z1, z2, z3` for every
//! day, so a seeded generator reproduces the same path.

use rand::RngCore;
use tracing::debug;

use crate::error::{ensure_finite, ensure_nonzero_len, ensure_positive, ensure_speed, VixResult};
use crate::models::expected::{mean_reversion_adjustment, ModelInputs, ModelOutputs};
use crate::models::traits::PathSimulator;
use crate::models::utils::{apply_floor, standard_normal};
use crate::simulation::types::SimulatedPath;

/// Default proportional noise level of the daily volatility and VIX shocks
pub const DEFAULT_NOISE_LEVEL: f64 = 0.15;

/// Mean of the daily VIX premium over realized volatility
pub const VIX_PREMIUM_MEAN: f64 = 3.5;

/// Standard deviation of the daily VIX premium
pub const VIX_PREMIUM_SPREAD: f64 = 0.2;

/// Parameters of one projected path.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeanReversionParams {
    /// Seed VIX (day 0)
    pub current_vix: f64,
    /// Seed realized volatility (day 0), usually the model's future-vol forecast
    pub future_vol: f64,
    /// Path length including the seed day
    pub horizon_days: usize,
    pub mean_rev_level: f64,
    pub mean_rev_speed: f64,
    /// Proportional noise scale applied to both series
    pub noise_level: f64,
}

impl MeanReversionParams {
    /// Seeds a projection from the expected-value model: the VIX starts at its
    /// current level and realized volatility at the model's forecast.
    pub fn from_model(inputs: &ModelInputs, outputs: &ModelOutputs, noise_level: f64) -> Self {
        Self {
            current_vix: inputs.vix,
            future_vol: outputs.future_vol,
            horizon_days: inputs.horizon_days,
            mean_rev_level: inputs.mean_rev_level,
            mean_rev_speed: inputs.mean_rev_speed,
            noise_level,
        }
    }

    pub fn validate(&self) -> VixResult<()> {
        ensure_positive("current_vix", self.current_vix)?;
        // The forecast may legitimately be negative for extreme inputs; the
        // recurrence floors every later day.
        ensure_finite("future_vol", self.future_vol)?;
        ensure_nonzero_len("horizon_days", self.horizon_days)?;
        ensure_positive("mean_rev_level", self.mean_rev_level)?;
        ensure_speed(self.mean_rev_speed)?;
        ensure_finite("noise_level", self.noise_level)?;
        if self.noise_level < 0.0 {
            return Err(crate::error::VixError::invalid_parameter(format!(
                "noise_level must be >= 0, got {}",
                self.noise_level
            )));
        }
        Ok(())
    }
}

/// Next realized-volatility value given the standard normal shock `z`.
#[inline]
pub fn vol_step(prev_vol: f64, mean_rev_level: f64, mean_rev_speed: f64, noise_level: f64, z: f64) -> f64 {
    let vol_mr = mean_reversion_adjustment(prev_vol, mean_rev_level, mean_rev_speed);
    let vol_noise = noise_level * prev_vol * z;
    apply_floor(prev_vol + vol_mr + vol_noise)
}

/// Next VIX value given the new volatility and the premium / noise shocks.
#[inline]
pub fn vix_step(new_vol: f64, prev_vix: f64, noise_level: f64, z_premium: f64, z_noise: f64) -> f64 {
    let vix_premium = VIX_PREMIUM_MEAN + VIX_PREMIUM_SPREAD * z_premium;
    let vix_noise = noise_level * prev_vix * z_noise;
    apply_floor(new_vol + vix_premium + vix_noise)
}

/// Projects one path of length `params.horizon_days`.
///
/// Day 0 holds `current_vix` / `future_vol` exactly as given, without the floor.
pub fn simulate_vix_path(params: &MeanReversionParams, rng: &mut dyn RngCore) -> VixResult<SimulatedPath> {
    params.validate()?;

    let days = params.horizon_days;
    let mut path = SimulatedPath::seeded(params.current_vix, params.future_vol, days);
    let mut prev_vol = params.future_vol;
    let mut prev_vix = params.current_vix;

    for _ in 1..days {
        let z_vol = standard_normal(rng);
        let new_vol = vol_step(
            prev_vol,
            params.mean_rev_level,
            params.mean_rev_speed,
            params.noise_level,
            z_vol,
        );

        let z_premium = standard_normal(rng);
        let z_vix = standard_normal(rng);
        let new_vix = vix_step(new_vol, prev_vix, params.noise_level, z_premium, z_vix);

        path.push(new_vix, new_vol);
        prev_vol = new_vol;
        prev_vix = new_vix;
    }

    debug!(days, "mean-reversion path simulated");
    Ok(path)
}

/// [`PathSimulator`] wrapper around [`simulate_vix_path`].
#[derive(Debug, Clone)]
pub struct MeanReversionSimulator {
    pub params: MeanReversionParams,
}

impl MeanReversionSimulator {
    pub fn new(params: MeanReversionParams) -> Self {
        Self { params }
    }
}

impl PathSimulator for MeanReversionSimulator {
    fn name(&self) -> &str {
        "mean_reversion"
    }

    fn horizon(&self) -> usize {
        self.params.horizon_days
    }

    fn validate(&self) -> VixResult<()> {
        self.params.validate()
    }

    fn simulate(&self, rng: &mut dyn RngCore) -> VixResult<SimulatedPath> {
        simulate_vix_path(&self.params, rng)
    }
}
