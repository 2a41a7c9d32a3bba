//! # vix-lib: Expected VIX and Mean-Reverting Volatility Paths
//!
//! `vix-lib` is a small educational library that explains the VIX "fear gauge"
//! through a handful of transparent formulas and stochastic simulators. It is
//! illustrative, not investment-grade: nothing here is calibrated to market
//! data or computed from option chains.
//!
//! ## Core Features
//!
//! - **Expected-Value Model**: expected VIX from recent realized volatility,
//!   mean reversion and a volatility premium, plus a sentiment classification
//! - **Path Simulator**: day-by-day VIX / realized-volatility projection with
//!   mean reversion, proportional Gaussian noise and a stochastic premium
//! - **Regime Scenarios**: bull / bear / sideways / crash markets in low to
//!   extreme volatility regimes, with random event shocks
//! - **Event Replay**: stylised VIX paths around historical stress events
//! - **Monte Carlo Bands**: per-day mean and quantile fans across many seeded paths
//!
//! Every stochastic function takes the random source as an argument. Seed a
//! [`rand::rngs::StdRng`] to reproduce a path exactly.
//!
//! ## Quick Start
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use vix_lib::{analyze, project_vix_path, ModelInputs, Sentiment};
//!
//! let inputs = ModelInputs { recent_vol: 12.0, vix: 25.0, ..ModelInputs::default() };
//!
//! // Closed-form model
//! let outputs = analyze(&inputs)?;
//! assert_eq!(outputs.sentiment, Sentiment::Fear);
//!
//! // Seeded projection over the forecast horizon
//! let mut rng = StdRng::seed_from_u64(42);
//! let (_, path) = project_vix_path(&inputs, 0.15, &mut rng)?;
//! assert_eq!(path.len(), inputs.horizon_days);
//! assert!(path.vix.iter().skip(1).all(|&v| v >= 5.0));
//! # Ok::<(), vix_lib::VixError>(())
//! ```
//!
//! ## Volatility Floor
//!
//! Simulated paths are clamped at [`VOL_FLOOR`] (5%). The clamp compresses the
//! lower tail onto the floor rather than reflecting it, so means and low
//! quantiles computed from simulated paths are biased slightly upwards.
//!
//! ## Configuration Presets
//!
//! [`SimulationConfig`] can be loaded from TOML or built from a preset:
//! - `interactive()`: fresh randomness, inputs clamped to slider ranges
//! - `reproducible()`: fixed seed
//! - `monte_carlo()`: large seeded ensemble with a five-point quantile fan
//! - `minimal()`: small ensemble for quick checks

// ================================================================================================
// MODULES
// ================================================================================================

pub mod error;
pub mod models;
pub mod presets;
pub mod simulation;

// ================================================================================================
// IMPORTS
// ================================================================================================

use rand::RngCore;
use tracing::info;

use models::mean_reversion::{simulate_vix_path, MeanReversionSimulator};
use models::regime::simulate_regime;
use models::replay::{find_event, replay_event};
use simulation::pipeline::MonteCarloProcess;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

pub use error::{VixError, VixResult};

// Expected-value model
pub use models::expected::{
    analyze, expected_vix, mean_reversion_adjustment, predict_future_volatility, InputBounds,
    ModelInputs, ModelOutputs, Sentiment, VixLevelBand, DEVIATION_DAMPING, SENTIMENT_THRESHOLD,
};

// Simulators
pub use models::mean_reversion::{MeanReversionParams, DEFAULT_NOISE_LEVEL};
pub use models::regime::{MarketTrend, RegimeConfig, RegimeSimulator, VolRegime};
pub use models::replay::{historical_events, EventProfile, EventReplay, HistoricalEvent};
pub use models::traits::PathSimulator;
pub use models::utils::VOL_FLOOR;

// Configuration and results
pub use presets::ScenarioPreset;
pub use simulation::config::{MonteCarloConfig, SimulationConfig};
pub use simulation::types::{EnsembleBands, PathSummary, SeriesStats, SimulatedPath};

// ================================================================================================
// DEFAULT CONFIGURATIONS
// ================================================================================================

/// Pre-configured simulation settings for common use cases.
///
/// # Available Configurations
///
/// - [`interactive()`]: Exploratory use, unseeded
/// - [`reproducible()`]: Seeded single runs
/// - [`monte_carlo()`]: Large seeded ensembles
/// - [`minimal()`]: Quick validation settings
pub mod default_configs {
    use crate::simulation::config::SimulationConfig;

    /// Configuration for exploratory, interactive use.
    ///
    /// **Characteristics:**
    /// - No seed: every run draws fresh entropy
    /// - Inputs are clamped to the slider ranges before validation
    /// - Silent logging
    ///
    /// # Example
    ///
    /// ```rust
    /// use vix_lib::default_configs;
    ///
    /// let config = default_configs::interactive();
    /// assert!(config.seed.is_none());
    /// ```
    pub fn interactive() -> SimulationConfig {
        SimulationConfig::interactive()
    }

    /// Seeded configuration: the same inputs always give the same paths.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vix_lib::default_configs;
    ///
    /// let config = default_configs::reproducible();
    /// assert_eq!(config.seed, Some(42));
    /// ```
    pub fn reproducible() -> SimulationConfig {
        SimulationConfig::reproducible()
    }

    /// Ensemble configuration for projection confidence bands.
    ///
    /// **Characteristics:**
    /// - 5,000 paths
    /// - Quantiles: 5%, 25%, 50%, 75%, 95%
    /// - Seeded ensemble, info-level logging
    pub fn monte_carlo() -> SimulationConfig {
        SimulationConfig::monte_carlo()
    }

    /// Minimal configuration for quick validation and debugging.
    ///
    /// **Characteristics:**
    /// - 50 paths
    /// - Quantiles: 10%, 50%, 90%
    pub fn minimal() -> SimulationConfig {
        SimulationConfig::minimal()
    }
}

// ================================================================================================
// ENTRY POINTS
// ================================================================================================

/// Evaluate the expected-value model and project one path over the horizon.
///
/// The VIX path starts at `inputs.vix` and the realized-volatility path at the
/// model's `future_vol` forecast; both then follow the mean-reverting
/// recurrence towards `inputs.mean_rev_level`.
///
/// # Errors
///
/// [`VixError::InvalidParameter`] when the inputs fail validation (zero
/// horizon, speed outside (0, 1], non-finite or non-positive volatility) or
/// when `noise_level` is negative or non-finite.
pub fn project_vix_path(
    inputs: &ModelInputs,
    noise_level: f64,
    rng: &mut dyn RngCore,
) -> VixResult<(ModelOutputs, SimulatedPath)> {
    let outputs = analyze(inputs)?;
    let params = MeanReversionParams::from_model(inputs, &outputs, noise_level);
    let path = simulate_vix_path(&params, rng)?;
    Ok((outputs, path))
}

/// Simulate one regime scenario and summarise it.
///
/// # Example
///
/// ```rust
/// use rand::{rngs::StdRng, SeedableRng};
/// use vix_lib::{simulate_market_scenario, MarketTrend, RegimeConfig, VolRegime};
///
/// let config = RegimeConfig::new(MarketTrend::Crash, VolRegime::High, 10.0, 60);
/// let mut rng = StdRng::seed_from_u64(1);
/// let (path, summary) = simulate_market_scenario(&config, &mut rng)?;
/// assert_eq!(path.len(), 60);
/// assert!(path.vol.iter().all(|&v| v >= 5.0));
/// assert!(summary.vix.max >= summary.vix.min);
/// # Ok::<(), vix_lib::VixError>(())
/// ```
pub fn simulate_market_scenario(
    config: &RegimeConfig,
    rng: &mut dyn RngCore,
) -> VixResult<(SimulatedPath, PathSummary)> {
    let path = simulate_regime(config, rng)?;
    let summary = path.summary();
    info!(
        trend = %config.trend,
        regime = %config.regime,
        avg_vix = summary.vix.mean,
        avg_premium = summary.mean_premium,
        "market scenario simulated"
    );
    Ok((path, summary))
}

/// Replay a catalog event by (partial, case-insensitive) name.
pub fn replay_historical_event(name: &str, rng: &mut dyn RngCore) -> VixResult<EventReplay> {
    let event = find_event(name)?;
    replay_event(&event, rng)
}

/// Monte Carlo bands of the single-path projection described by `config`.
pub fn run_monte_carlo(config: &SimulationConfig) -> VixResult<(ModelOutputs, EnsembleBands)> {
    config.validate()?;
    let inputs = config.prepared_inputs()?;
    let outputs = analyze(&inputs)?;
    let params = MeanReversionParams::from_model(&inputs, &outputs, config.noise_level);

    let process = MonteCarloProcess::new(
        Box::new(MeanReversionSimulator::new(params)),
        config.monte_carlo.clone(),
    );
    let bands = process.run()?;
    Ok((outputs, bands))
}
