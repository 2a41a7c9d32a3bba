use std::fmt;

use crate::error::{ensure_finite, ensure_nonzero_len, ensure_positive, ensure_speed, VixResult};

/// Deviation (in VIX points) beyond which the market is classified as fearful
/// or complacent. Fixed, not configurable.
pub const SENTIMENT_THRESHOLD: f64 = 5.0;

/// Raw market parameters supplied by the caller.
///
/// All volatility quantities are expressed in percent (e.g. `12.0` for 12%).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ModelInputs {
    /// Recent realized volatility (%)
    pub recent_vol: f64,
    /// Current VIX level (%)
    pub vix: f64,
    /// Mean-reversion speed, fraction of the gap closed per period
    pub mean_rev_speed: f64,
    /// Long-run volatility level the model reverts to (%)
    pub mean_rev_level: f64,
    /// Volatility premium of implied over realized volatility (%)
    pub premium_factor: f64,
    /// Forecast horizon in days
    pub horizon_days: usize,
}

impl Default for ModelInputs {
    fn default() -> Self {
        Self {
            recent_vol: 12.0,
            vix: 16.0,
            mean_rev_speed: 0.25,
            mean_rev_level: 16.0,
            premium_factor: 3.5,
            horizon_days: 30,
        }
    }
}

impl ModelInputs {
    /// Checks the inputs against the library contract.
    ///
    /// This is deliberately looser than [`InputBounds::ui`]: any finite,
    /// positive volatility is accepted, the premium may be any finite number,
    /// and the speed must be in (0, 1].
    pub fn validate(&self) -> VixResult<()> {
        ensure_positive("recent_vol", self.recent_vol)?;
        ensure_positive("vix", self.vix)?;
        ensure_speed(self.mean_rev_speed)?;
        ensure_positive("mean_rev_level", self.mean_rev_level)?;
        ensure_finite("premium_factor", self.premium_factor)?;
        ensure_nonzero_len("horizon_days", self.horizon_days)?;
        Ok(())
    }
}

/// Derived quantities. Recomputed from [`ModelInputs`] on every change.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelOutputs {
    pub mean_rev_adjustment: f64,
    pub expected_vix: f64,
    /// Actual minus expected VIX
    pub vix_deviation: f64,
    pub predicted_change: f64,
    /// Recent volatility plus the predicted change; seeds the path simulator
    pub future_vol: f64,
    pub sentiment: Sentiment,
}

/// Market sentiment implied by the VIX deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sentiment {
    /// VIX well above what current conditions justify
    Fear,
    Normal,
    /// VIX well below what current conditions justify
    Complacency,
}

impl Sentiment {
    /// Threshold policy: deviation > 5 is fear, deviation < -5 is complacency.
    /// Both comparisons are strict, so exactly ±5 is normal.
    pub fn classify(vix_deviation: f64) -> Self {
        if vix_deviation > SENTIMENT_THRESHOLD {
            Sentiment::Fear
        } else if vix_deviation < -SENTIMENT_THRESHOLD {
            Sentiment::Complacency
        } else {
            Sentiment::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Fear => "HIGH (Market Fear)",
            Sentiment::Normal => "NORMAL",
            Sentiment::Complacency => "LOW (Market Complacency)",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Conventional reading of an absolute VIX level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VixLevelBand {
    /// Below 12: complacency, risks may be building
    Low,
    /// 12 to 20: healthy market functioning
    Normal,
    /// 20 to 30: uncertainty, moderate stress
    Elevated,
    /// Above 30: fear, crisis
    High,
}

impl VixLevelBand {
    pub fn classify(vix: f64) -> Self {
        if vix < 12.0 {
            VixLevelBand::Low
        } else if vix < 20.0 {
            VixLevelBand::Normal
        } else if vix < 30.0 {
            VixLevelBand::Elevated
        } else {
            VixLevelBand::High
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            VixLevelBand::Low => "Low volatility: market complacency, potential build-up of risks",
            VixLevelBand::Normal => "Normal volatility: healthy market functioning",
            VixLevelBand::Elevated => "Elevated volatility: uncertainty, moderate stress",
            VixLevelBand::High => "High volatility: fear, crisis, significant market stress",
        }
    }
}

/// Inclusive ranges for each input, as offered by an interactive front end.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InputBounds {
    pub recent_vol: (f64, f64),
    pub vix: (f64, f64),
    pub mean_rev_speed: (f64, f64),
    pub mean_rev_level: (f64, f64),
    pub premium_factor: (f64, f64),
    pub horizon_days: (usize, usize),
}

impl Default for InputBounds {
    fn default() -> Self {
        Self::ui()
    }
}

impl InputBounds {
    /// Slider ranges of the interactive explainer
    pub fn ui() -> Self {
        Self {
            recent_vol: (5.0, 50.0),
            vix: (5.0, 50.0),
            mean_rev_speed: (0.1, 0.5),
            mean_rev_level: (10.0, 25.0),
            premium_factor: (1.0, 6.0),
            horizon_days: (10, 90),
        }
    }

    /// Returns `true` when every field lies inside its range.
    pub fn contains(&self, inputs: &ModelInputs) -> bool {
        let within = |v: f64, (lo, hi): (f64, f64)| v >= lo && v <= hi;
        within(inputs.recent_vol, self.recent_vol)
            && within(inputs.vix, self.vix)
            && within(inputs.mean_rev_speed, self.mean_rev_speed)
            && within(inputs.mean_rev_level, self.mean_rev_level)
            && within(inputs.premium_factor, self.premium_factor)
            && inputs.horizon_days >= self.horizon_days.0
            && inputs.horizon_days <= self.horizon_days.1
    }

    /// Clamps every field into its range. NaN fields are replaced by the lower bound.
    pub fn clamp(&self, inputs: &ModelInputs) -> ModelInputs {
        let clamp = |v: f64, (lo, hi): (f64, f64)| if v.is_nan() { lo } else { v.clamp(lo, hi) };
        ModelInputs {
            recent_vol: clamp(inputs.recent_vol, self.recent_vol),
            vix: clamp(inputs.vix, self.vix),
            mean_rev_speed: clamp(inputs.mean_rev_speed, self.mean_rev_speed),
            mean_rev_level: clamp(inputs.mean_rev_level, self.mean_rev_level),
            premium_factor: clamp(inputs.premium_factor, self.premium_factor),
            horizon_days: inputs
                .horizon_days
                .clamp(self.horizon_days.0, self.horizon_days.1),
        }
    }
}
