use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{ensure_finite, ensure_nonzero_len, VixError, VixResult};
use crate::models::expected::{InputBounds, ModelInputs};
use crate::models::mean_reversion::DEFAULT_NOISE_LEVEL;
use crate::models::regime::RegimeConfig;

/// Monte Carlo ensemble settings
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MonteCarloConfig {
    /// Number of simulated paths
    #[cfg_attr(feature = "serde", serde(default = "default_paths"))]
    pub paths: usize,
    /// Quantile levels in [0, 1] reported per day
    #[cfg_attr(feature = "serde", serde(default = "default_quantiles"))]
    pub quantiles: Vec<f64>,
    /// Seed of path 0; path `k` is seeded with `base_seed + k`
    #[cfg_attr(feature = "serde", serde(default = "default_base_seed"))]
    pub base_seed: u64,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            paths: default_paths(),
            quantiles: default_quantiles(),
            base_seed: default_base_seed(),
        }
    }
}

impl MonteCarloConfig {
    pub fn validate(&self) -> VixResult<()> {
        ensure_nonzero_len("monte_carlo.paths", self.paths)?;
        for &q in &self.quantiles {
            ensure_finite("monte_carlo.quantiles", q)?;
            if !(0.0..=1.0).contains(&q) {
                return Err(VixError::invalid_parameter(format!(
                    "quantile levels must be in [0, 1], got {}",
                    q
                )));
            }
        }
        Ok(())
    }
}

/// Main configuration struct for the simulators
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    /// Proportional noise of the single-path simulator
    #[cfg_attr(feature = "serde", serde(default = "default_noise_level"))]
    pub noise_level: f64,

    /// Random seed for reproducibility (None = fresh entropy per run)
    #[cfg_attr(feature = "serde", serde(default))]
    pub seed: Option<u64>,

    /// Verbosity level (0=silent, 1=info, 2=debug)
    #[cfg_attr(feature = "serde", serde(default))]
    pub verbosity: u8,

    /// Clamp inputs into the interactive slider ranges before validation
    #[cfg_attr(feature = "serde", serde(default))]
    pub clamp_to_ui_bounds: bool,

    /// Market inputs of the expected-value model and path projection
    #[cfg_attr(feature = "serde", serde(default))]
    pub inputs: ModelInputs,

    /// Scenario of the regime simulator
    #[cfg_attr(feature = "serde", serde(default))]
    pub regime: RegimeConfig,

    /// Ensemble settings
    #[cfg_attr(feature = "serde", serde(default))]
    pub monte_carlo: MonteCarloConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            noise_level: default_noise_level(),
            seed: None,
            verbosity: 0,
            clamp_to_ui_bounds: false,
            inputs: ModelInputs::default(),
            regime: RegimeConfig::default(),
            monte_carlo: MonteCarloConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Fresh randomness on every run, like the interactive explainer
    pub fn interactive() -> Self {
        Self {
            clamp_to_ui_bounds: true,
            ..Self::default()
        }
    }

    /// Fixed seed so every run reproduces the same paths
    pub fn reproducible() -> Self {
        Self {
            seed: Some(42),
            ..Self::default()
        }
    }

    /// Large seeded ensemble with a five-point quantile fan
    pub fn monte_carlo() -> Self {
        Self {
            seed: Some(123456),
            verbosity: 1,
            monte_carlo: MonteCarloConfig {
                paths: 5000,
                quantiles: vec![0.05, 0.25, 0.5, 0.75, 0.95],
                base_seed: 123456,
            },
            ..Self::default()
        }
    }

    /// Small ensemble for quick checks and tests
    pub fn minimal() -> Self {
        Self {
            seed: Some(7),
            monte_carlo: MonteCarloConfig {
                paths: 50,
                quantiles: vec![0.1, 0.5, 0.9],
                base_seed: 7,
            },
            ..Self::default()
        }
    }

    pub fn validate(&self) -> VixResult<()> {
        ensure_finite("noise_level", self.noise_level)?;
        if self.noise_level < 0.0 {
            return Err(VixError::config(format!(
                "noise_level must be >= 0, got {}",
                self.noise_level
            )));
        }
        self.prepared_inputs()?;
        self.regime.validate()?;
        self.monte_carlo.validate()
    }

    /// Inputs after optional clamping, validated.
    pub fn prepared_inputs(&self) -> VixResult<ModelInputs> {
        let inputs = if self.clamp_to_ui_bounds {
            let bounds = InputBounds::ui();
            if !bounds.contains(&self.inputs) {
                tracing::warn!(inputs = ?self.inputs, "inputs outside slider ranges were clamped");
            }
            bounds.clamp(&self.inputs)
        } else {
            self.inputs
        };
        inputs.validate()?;
        Ok(inputs)
    }

    /// Random source described by this configuration.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Parses a TOML document. Omitted fields take their defaults.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        use anyhow::Context;

        let config: Self = toml::from_str(text).context("failed to parse simulation config")?;
        config.validate().context("invalid simulation config")?;
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    #[cfg(feature = "serde")]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        use anyhow::Context;

        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("in config file {}", path.display()))
    }
}

fn default_noise_level() -> f64 {
    DEFAULT_NOISE_LEVEL
}

fn default_paths() -> usize {
    1000
}

fn default_quantiles() -> Vec<f64> {
    vec![0.05, 0.5, 0.95]
}

fn default_base_seed() -> u64 {
    123456
}
