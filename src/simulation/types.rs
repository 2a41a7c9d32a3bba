use statrs::statistics::Statistics;

use crate::error::{VixError, VixResult};

/// Paired day-by-day VIX and realized-volatility series.
///
/// Index 0 holds the seed values. Both series always have the same length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulatedPath {
    pub vix: Vec<f64>,
    pub vol: Vec<f64>,
}

impl SimulatedPath {
    /// Starts a path of capacity `days` from its seed values.
    pub(crate) fn seeded(vix0: f64, vol0: f64, days: usize) -> Self {
        let mut vix = Vec::with_capacity(days);
        let mut vol = Vec::with_capacity(days);
        vix.push(vix0);
        vol.push(vol0);
        Self { vix, vol }
    }

    /// Builds a path from two series, rejecting unequal lengths.
    pub fn new(vix: Vec<f64>, vol: Vec<f64>) -> VixResult<Self> {
        if vix.len() != vol.len() {
            return Err(VixError::LengthMismatch {
                axis: vol.len(),
                values: vix.len(),
            });
        }
        Ok(Self { vix, vol })
    }

    pub(crate) fn push(&mut self, vix: f64, vol: f64) {
        self.vix.push(vix);
        self.vol.push(vol);
    }

    pub fn len(&self) -> usize {
        self.vix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vix.is_empty()
    }

    /// Day-by-day VIX minus realized volatility
    pub fn premium(&self) -> Vec<f64> {
        self.vix
            .iter()
            .zip(self.vol.iter())
            .map(|(vix, vol)| vix - vol)
            .collect()
    }

    /// Read-only summary statistics of both series.
    pub fn summary(&self) -> PathSummary {
        PathSummary {
            vix: SeriesStats::from_values(&self.vix),
            vol: SeriesStats::from_values(&self.vol),
            mean_premium: SeriesStats::from_values(&self.premium()).mean,
        }
    }
}

/// Descriptive statistics of one series. All fields are NaN for an empty series.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeriesStats {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub range: f64,
}

impl SeriesStats {
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self {
                mean: f64::NAN,
                max: f64::NAN,
                min: f64::NAN,
                range: f64::NAN,
            };
        }
        // Fully qualified to avoid the clash with Iterator::min/max
        let max = Statistics::max(values.iter());
        let min = Statistics::min(values.iter());
        Self {
            mean: Statistics::mean(values.iter()),
            max,
            min,
            range: max - min,
        }
    }
}

/// Summary of a simulated path.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathSummary {
    pub vix: SeriesStats,
    pub vol: SeriesStats,
    /// Mean of the daily VIX minus realized-volatility premium
    pub mean_premium: f64,
}

/// Per-day distribution of an ensemble of paths.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnsembleBands {
    /// Model name of the simulator that produced the ensemble
    pub model: String,
    /// Number of paths aggregated
    pub paths: usize,
    /// Quantile levels, in the order of the `*_quantiles` rows
    pub quantile_levels: Vec<f64>,
    pub vix_mean: Vec<f64>,
    pub vol_mean: Vec<f64>,
    /// `vix_quantiles[q][day]`
    pub vix_quantiles: Vec<Vec<f64>>,
    /// `vol_quantiles[q][day]`
    pub vol_quantiles: Vec<Vec<f64>>,
    /// Statistics of the last-day VIX across paths
    pub terminal_vix: SeriesStats,
    /// Statistics of the last-day realized volatility across paths
    pub terminal_vol: SeriesStats,
}

impl EnsembleBands {
    pub fn horizon(&self) -> usize {
        self.vix_mean.len()
    }

    /// VIX band for a quantile level, if it was requested.
    pub fn vix_band(&self, level: f64) -> Option<&[f64]> {
        self.level_index(level).map(|i| self.vix_quantiles[i].as_slice())
    }

    /// Volatility band for a quantile level, if it was requested.
    pub fn vol_band(&self, level: f64) -> Option<&[f64]> {
        self.level_index(level).map(|i| self.vol_quantiles[i].as_slice())
    }

    fn level_index(&self, level: f64) -> Option<usize> {
        self.quantile_levels
            .iter()
            .position(|&q| (q - level).abs() < 1e-10)
    }
}
