//! Named market scenarios for the expected-value model.
//!
//! Each preset is a complete [`ModelInputs`] bundle. They differ only in the
//! recent realized volatility and the VIX level; the mean-reversion settings,
//! premium and horizon stay at their defaults.

use std::fmt;
use std::str::FromStr;

use crate::error::VixError;
use crate::models::expected::ModelInputs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ScenarioPreset {
    /// Reset values: recent vol 12, VIX 16
    Default,
    /// Typical calm market: recent vol 8, VIX 11
    LowVol,
    /// Typical crisis: recent vol 25, VIX 30
    HighVol,
    /// VIX elevated relative to realized volatility: 15 / 28
    Fear,
    /// VIX depressed relative to realized volatility: 15 / 10
    Complacency,
}

impl ScenarioPreset {
    pub const ALL: [ScenarioPreset; 5] = [
        ScenarioPreset::Default,
        ScenarioPreset::LowVol,
        ScenarioPreset::HighVol,
        ScenarioPreset::Fear,
        ScenarioPreset::Complacency,
    ];

    /// `(recent_vol, vix)` of the preset
    fn levels(&self) -> (f64, f64) {
        match self {
            ScenarioPreset::Default => (12.0, 16.0),
            ScenarioPreset::LowVol => (8.0, 11.0),
            ScenarioPreset::HighVol => (25.0, 30.0),
            ScenarioPreset::Fear => (15.0, 28.0),
            ScenarioPreset::Complacency => (15.0, 10.0),
        }
    }

    pub fn inputs(&self) -> ModelInputs {
        let (recent_vol, vix) = self.levels();
        ModelInputs {
            recent_vol,
            vix,
            ..ModelInputs::default()
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScenarioPreset::Default => "default",
            ScenarioPreset::LowVol => "low-vol",
            ScenarioPreset::HighVol => "high-vol",
            ScenarioPreset::Fear => "fear",
            ScenarioPreset::Complacency => "complacency",
        }
    }
}

impl fmt::Display for ScenarioPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScenarioPreset {
    type Err = VixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name() == key)
            .ok_or_else(|| VixError::invalid_parameter(format!("unknown scenario preset '{}'", s)))
    }
}
