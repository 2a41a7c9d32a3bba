// src/models/expected/model.rs

//! Closed-form expected-VIX formulas
//!
//! ```text
//! mean_rev_adj     = (mean_rev_level - recent_vol) * mean_rev_speed
//! expected_vix     = recent_vol + mean_rev_adj + premium_factor
//! vix_deviation    = vix - expected_vix
//! predicted_change = mean_rev_adj + 0.5 * vix_deviation
//! future_vol       = recent_vol + predicted_change
//! ```
//!
//! The formulas are total over the reals; only [`analyze`] validates its input.

use tracing::debug;

use super::types::{ModelInputs, ModelOutputs, Sentiment};
use crate::error::VixResult;

/// Weight given to the VIX deviation in the one-step volatility forecast
pub const DEVIATION_DAMPING: f64 = 0.5;

/// Mean-reversion component of the next volatility change.
pub fn mean_reversion_adjustment(recent_vol: f64, mean_rev_level: f64, mean_rev_speed: f64) -> f64 {
    (mean_rev_level - recent_vol) * mean_rev_speed
}

/// The VIX level current conditions would justify.
pub fn expected_vix(recent_vol: f64, mean_rev_adjustment: f64, premium_factor: f64) -> f64 {
    recent_vol + mean_rev_adjustment + premium_factor
}

/// One-step volatility forecast.
///
/// Returns `(future_vol, predicted_change)`.
pub fn predict_future_volatility(
    recent_vol: f64,
    vix: f64,
    expected_vix: f64,
    mean_rev_adjustment: f64,
) -> (f64, f64) {
    let vix_deviation = vix - expected_vix;
    let predicted_change = mean_rev_adjustment + vix_deviation * DEVIATION_DAMPING;
    (recent_vol + predicted_change, predicted_change)
}

/// Runs the whole expected-value model on validated inputs.
///
/// # Example
///
/// ```rust
/// use vix_lib::{analyze, ModelInputs, Sentiment};
///
/// let inputs = ModelInputs { recent_vol: 12.0, vix: 25.0, mean_rev_level: 16.0,
///     mean_rev_speed: 0.25, premium_factor: 3.5, horizon_days: 30 };
/// let out = analyze(&inputs)?;
/// assert!((out.expected_vix - 16.5).abs() < 1e-9);
/// assert_eq!(out.sentiment, Sentiment::Fear);
/// # Ok::<(), vix_lib::VixError>(())
/// ```
pub fn analyze(inputs: &ModelInputs) -> VixResult<ModelOutputs> {
    inputs.validate()?;

    let mean_rev_adj = mean_reversion_adjustment(
        inputs.recent_vol,
        inputs.mean_rev_level,
        inputs.mean_rev_speed,
    );
    let expected = expected_vix(inputs.recent_vol, mean_rev_adj, inputs.premium_factor);
    let (future_vol, predicted_change) =
        predict_future_volatility(inputs.recent_vol, inputs.vix, expected, mean_rev_adj);
    let vix_deviation = inputs.vix - expected;

    debug!(
        expected_vix = expected,
        vix_deviation, predicted_change, "expected-value model evaluated"
    );

    Ok(ModelOutputs {
        mean_rev_adjustment: mean_rev_adj,
        expected_vix: expected,
        vix_deviation,
        predicted_change,
        future_vol,
        sentiment: Sentiment::classify(vix_deviation),
    })
}

impl ModelOutputs {
    /// Plain-language reading of the outputs.
    pub fn interpretation(&self) -> String {
        let direction = if self.vix_deviation > 0.0 { "above" } else { "below" };
        let mood = if self.vix_deviation > 0.0 {
            "displaying fear"
        } else {
            "displaying complacency"
        };
        let trend = if self.predicted_change > 0.0 {
            "increase"
        } else {
            "decrease"
        };
        let insight = match self.sentiment {
            Sentiment::Fear => {
                "Markets appear more fearful than warranted by current conditions. \
                 Historically, this has preceded volatility increases, but also potential market bottoms."
            }
            Sentiment::Complacency => {
                "Markets appear more complacent than warranted by current conditions. \
                 Historically, this has preceded volatility spikes and potential market corrections."
            }
            Sentiment::Normal => {
                "Markets appear to be pricing volatility in line with historical norms \
                 relative to current conditions."
            }
        };

        format!(
            "The VIX is currently {:.1}% {} its expected level. This suggests the market is {}. \
             Volatility might {} by approximately {:.1}% over the next 30 days. {}",
            self.vix_deviation.abs(),
            direction,
            mood,
            trend,
            self.predicted_change.abs(),
            insight
        )
    }
}
