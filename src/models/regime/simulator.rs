// src/models/regime/simulator.rs

//! Regime-conditioned path recurrence.
//!
//! ```text
//! start_vol = base_vol * multiplier
//! start_vix = start_vol + 4 + 2 * z
//!
//! m      = 1.5 if U < p else 1.0
//! vol[i] = max(5, vol[i-1] + 0.05 * (15 - vol[i-1]) + drift + 0.1 * vol[i-1] * z1) * m
//! vix[i] = max(5, vol[i] + 3.5 + 0.5 * z2 + 0.15 * vix[i-1] * z3) * m
//! ```
//!
//! The floor is applied before the event multiplier, and the VIX step uses the
//! already shocked `vol[i]`. Per day the draws are consumed in the order
//! `U, z1, z2, z3`.

use rand::RngCore;
use tracing::debug;

use super::types::RegimeConfig;
use crate::error::VixResult;
use crate::models::expected::mean_reversion_adjustment;
use crate::models::traits::PathSimulator;
use crate::models::utils::{apply_floor, standard_normal, uniform};
use crate::simulation::types::SimulatedPath;

/// Long-run volatility level of every regime scenario
pub const REGIME_MEAN_REV_LEVEL: f64 = 15.0;
/// Daily mean-reversion speed of every regime scenario
pub const REGIME_MEAN_REV_SPEED: f64 = 0.05;
/// Multiplier applied to both series on an event day
pub const EVENT_MULTIPLIER: f64 = 1.5;

const VOL_NOISE: f64 = 0.1;
const VIX_NOISE: f64 = 0.15;
const PREMIUM_MEAN: f64 = 3.5;
const PREMIUM_SPREAD: f64 = 0.5;
const START_PREMIUM: f64 = 4.0;
const START_PREMIUM_SPREAD: f64 = 2.0;

/// Draws whether today is an event day. Consumes exactly one uniform.
pub fn draw_event(rng: &mut dyn RngCore, event_probability_pct: f64) -> bool {
    uniform(rng) < event_probability_pct / 100.0
}

/// Event multiplier for the day
#[inline]
pub fn event_multiplier(event: bool) -> f64 {
    if event {
        EVENT_MULTIPLIER
    } else {
        1.0
    }
}

/// Next realized volatility: floored, then shocked.
#[inline]
pub fn regime_vol_step(prev_vol: f64, drift: f64, z: f64, multiplier: f64) -> f64 {
    let mean_rev = mean_reversion_adjustment(prev_vol, REGIME_MEAN_REV_LEVEL, REGIME_MEAN_REV_SPEED);
    let vol_noise = VOL_NOISE * prev_vol * z;
    apply_floor(prev_vol + mean_rev + drift + vol_noise) * multiplier
}

/// Next VIX from the (already shocked) new volatility: floored, then shocked.
#[inline]
pub fn regime_vix_step(new_vol: f64, prev_vix: f64, z_premium: f64, z_noise: f64, multiplier: f64) -> f64 {
    let vix_premium = PREMIUM_MEAN + PREMIUM_SPREAD * z_premium;
    let vix_noise = VIX_NOISE * prev_vix * z_noise;
    apply_floor(new_vol + vix_premium + vix_noise) * multiplier
}

/// Simulates one scenario path of `config.days` days.
///
/// The seed VIX is drawn first (`start_vol + 4 + 2z`) and is not floored.
pub fn simulate_regime(config: &RegimeConfig, rng: &mut dyn RngCore) -> VixResult<SimulatedPath> {
    config.validate()?;

    let drift = config.trend.drift();
    let start_vol = config.start_vol();
    let start_vix = start_vol + START_PREMIUM + START_PREMIUM_SPREAD * standard_normal(rng);

    let mut path = SimulatedPath::seeded(start_vix, start_vol, config.days);
    let mut prev_vol = start_vol;
    let mut prev_vix = start_vix;
    let mut event_days = 0usize;

    for _ in 1..config.days {
        let event = draw_event(rng, config.event_probability_pct);
        if event {
            event_days += 1;
        }
        let multiplier = event_multiplier(event);

        let new_vol = regime_vol_step(prev_vol, drift, standard_normal(rng), multiplier);
        let z_premium = standard_normal(rng);
        let z_vix = standard_normal(rng);
        let new_vix = regime_vix_step(new_vol, prev_vix, z_premium, z_vix, multiplier);

        path.push(new_vix, new_vol);
        prev_vol = new_vol;
        prev_vix = new_vix;
    }

    debug!(
        trend = %config.trend,
        regime = %config.regime,
        days = config.days,
        event_days,
        "regime path simulated"
    );
    Ok(path)
}

/// [`PathSimulator`] wrapper around [`simulate_regime`].
#[derive(Debug, Clone)]
pub struct RegimeSimulator {
    pub config: RegimeConfig,
}

impl RegimeSimulator {
    pub fn new(config: RegimeConfig) -> Self {
        Self { config }
    }
}

impl PathSimulator for RegimeSimulator {
    fn name(&self) -> &str {
        "regime"
    }

    fn horizon(&self) -> usize {
        self.config.days
    }

    fn validate(&self) -> VixResult<()> {
        self.config.validate()
    }

    fn simulate(&self, rng: &mut dyn RngCore) -> VixResult<SimulatedPath> {
        simulate_regime(&self.config, rng)
    }
}
