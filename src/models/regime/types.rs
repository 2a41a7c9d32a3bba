use std::fmt;
use std::str::FromStr;

use crate::error::{ensure_finite, ensure_nonzero_len, VixError, VixResult};

/// Direction of the simulated equity market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MarketTrend {
    Bull,
    Bear,
    Sideways,
    Crash,
}

/// Trend lookup: `(base_vol, drift)`
///
/// | Trend    | base_vol | drift |
/// |----------|----------|-------|
/// | Bull     | 10       | -0.1  |
/// | Bear     | 20       | +0.1  |
/// | Sideways | 15       | 0     |
/// | Crash    | 35       | +0.3  |
impl MarketTrend {
    pub const ALL: [MarketTrend; 4] = [
        MarketTrend::Bull,
        MarketTrend::Bear,
        MarketTrend::Sideways,
        MarketTrend::Crash,
    ];

    pub fn base_params(&self) -> (f64, f64) {
        match self {
            MarketTrend::Bull => (10.0, -0.1),
            MarketTrend::Bear => (20.0, 0.1),
            MarketTrend::Sideways => (15.0, 0.0),
            MarketTrend::Crash => (35.0, 0.3),
        }
    }

    pub fn base_vol(&self) -> f64 {
        self.base_params().0
    }

    pub fn drift(&self) -> f64 {
        self.base_params().1
    }

    pub fn label(&self) -> &'static str {
        match self {
            MarketTrend::Bull => "Bull Market",
            MarketTrend::Bear => "Bear Market",
            MarketTrend::Sideways => "Sideways",
            MarketTrend::Crash => "Crash",
        }
    }

    /// What the VIX typically does in this kind of market.
    pub fn insight(&self) -> &'static str {
        match self {
            MarketTrend::Bull => {
                "VIX maintains a relatively low level with small volatility premium. \
                 Occasional spikes may still occur with the specified event probability."
            }
            MarketTrend::Bear => {
                "VIX shows elevated levels with a higher volatility premium due to market \
                 uncertainty and downside protection demand."
            }
            MarketTrend::Sideways => {
                "VIX fluctuates around a moderate level with typical volatility premium. \
                 Directionless markets can sometimes create their own uncertainty."
            }
            MarketTrend::Crash => {
                "VIX spikes dramatically, reflecting extreme fear. The volatility premium often \
                 expands significantly during crash scenarios as demand for protection surges."
            }
        }
    }
}

impl fmt::Display for MarketTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MarketTrend {
    type Err = VixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bull" | "bull market" => Ok(MarketTrend::Bull),
            "bear" | "bear market" => Ok(MarketTrend::Bear),
            "sideways" => Ok(MarketTrend::Sideways),
            "crash" => Ok(MarketTrend::Crash),
            other => Err(VixError::invalid_parameter(format!(
                "unknown market trend '{}'",
                other
            ))),
        }
    }
}

/// Volatility regime scaling the trend's baseline volatility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum VolRegime {
    Low,
    Normal,
    High,
    Extreme,
}

impl VolRegime {
    pub const ALL: [VolRegime; 4] = [
        VolRegime::Low,
        VolRegime::Normal,
        VolRegime::High,
        VolRegime::Extreme,
    ];

    pub fn multiplier(&self) -> f64 {
        match self {
            VolRegime::Low => 0.7,
            VolRegime::Normal => 1.0,
            VolRegime::High => 1.5,
            VolRegime::Extreme => 2.5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VolRegime::Low => "Low",
            VolRegime::Normal => "Normal",
            VolRegime::High => "High",
            VolRegime::Extreme => "Extreme",
        }
    }
}

impl fmt::Display for VolRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VolRegime {
    type Err = VixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(VolRegime::Low),
            "normal" => Ok(VolRegime::Normal),
            "high" => Ok(VolRegime::High),
            "extreme" => Ok(VolRegime::Extreme),
            other => Err(VixError::invalid_parameter(format!(
                "unknown volatility regime '{}'",
                other
            ))),
        }
    }
}

/// Scenario selection for the regime simulator.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RegimeConfig {
    pub trend: MarketTrend,
    pub regime: VolRegime,
    /// Daily probability of a shock day, in percent [0, 100]
    pub event_probability_pct: f64,
    /// Path length including the seed day
    pub days: usize,
}

impl Default for RegimeConfig {
    fn default() -> Self {
        Self {
            trend: MarketTrend::Bull,
            regime: VolRegime::Normal,
            event_probability_pct: 10.0,
            days: 60,
        }
    }
}

impl RegimeConfig {
    pub fn new(trend: MarketTrend, regime: VolRegime, event_probability_pct: f64, days: usize) -> Self {
        Self {
            trend,
            regime,
            event_probability_pct,
            days,
        }
    }

    pub fn validate(&self) -> VixResult<()> {
        ensure_finite("event_probability_pct", self.event_probability_pct)?;
        if !(0.0..=100.0).contains(&self.event_probability_pct) {
            return Err(VixError::invalid_parameter(format!(
                "event_probability_pct must be in [0, 100], got {}",
                self.event_probability_pct
            )));
        }
        ensure_nonzero_len("days", self.days)
    }

    /// Baseline volatility scaled by the regime multiplier
    pub fn start_vol(&self) -> f64 {
        self.trend.base_vol() * self.regime.multiplier()
    }
}
