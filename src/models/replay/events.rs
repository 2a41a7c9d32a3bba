use crate::error::{ensure_nonzero_len, ensure_positive, VixError, VixResult};

/// Static description of a market stress episode.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoricalEvent {
    pub name: String,
    /// Human-readable date label (e.g. "October 2008")
    pub date: String,
    pub pre_vix: f64,
    pub peak_vix: f64,
    pub post_vix: f64,
    pub days_to_peak: usize,
    pub days_to_normalize: usize,
    pub description: String,
}

impl HistoricalEvent {
    pub fn validate(&self) -> VixResult<()> {
        ensure_positive("pre_vix", self.pre_vix)?;
        ensure_positive("peak_vix", self.peak_vix)?;
        ensure_positive("post_vix", self.post_vix)?;
        // days_to_peak may be 0: the buildup phase is then empty.
        ensure_nonzero_len("days_to_normalize", self.days_to_normalize)?;
        Ok(())
    }

    /// Qualitative reading of the event's shape.
    pub fn profile(&self) -> EventProfile {
        let pre_event = if self.pre_vix < 15.0 {
            "Low complacency"
        } else if self.pre_vix < 25.0 {
            "Normal volatility"
        } else {
            "Already elevated"
        };
        let peak = if self.peak_vix < 30.0 {
            "Moderate stress"
        } else if self.peak_vix < 50.0 {
            "Significant fear"
        } else {
            "Extreme panic"
        };
        let buildup = if self.days_to_peak < 5 {
            "Sudden shock"
        } else if self.days_to_peak < 15 {
            "Rapid deterioration"
        } else {
            "Gradual buildup"
        };
        let normalization = if self.days_to_normalize < 20 {
            "Quick recovery"
        } else if self.days_to_normalize < 45 {
            "Normal recovery"
        } else {
            "Extended stress"
        };

        EventProfile {
            pre_event,
            peak,
            buildup,
            normalization,
        }
    }
}

/// Labels describing each phase of a [`HistoricalEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventProfile {
    pub pre_event: &'static str,
    pub peak: &'static str,
    pub buildup: &'static str,
    pub normalization: &'static str,
}

fn event(
    name: &str,
    date: &str,
    (pre_vix, peak_vix, post_vix): (f64, f64, f64),
    (days_to_peak, days_to_normalize): (usize, usize),
    description: &str,
) -> HistoricalEvent {
    HistoricalEvent {
        name: name.to_string(),
        date: date.to_string(),
        pre_vix,
        peak_vix,
        post_vix,
        days_to_peak,
        days_to_normalize,
        description: description.to_string(),
    }
}

/// Built-in catalog of historical stress events.
pub fn historical_events() -> Vec<HistoricalEvent> {
    vec![
        event(
            "2008 Financial Crisis",
            "October 2008",
            (25.0, 80.0, 40.0),
            (21, 95),
            "Global financial crisis triggered by the subprime mortgage collapse led to \
             Lehman Brothers' bankruptcy and a market crash.",
        ),
        event(
            "2010 Flash Crash",
            "May 6, 2010",
            (20.0, 42.0, 25.0),
            (1, 12),
            "The Dow Jones dropped about 1,000 points (around 9%) within minutes, only to \
             recover most losses by close.",
        ),
        event(
            "2020 COVID Crash",
            "March 2020",
            (15.0, 82.0, 30.0),
            (18, 60),
            "Global pandemic fears caused the fastest 30% market drop in history, with \
             unprecedented volatility and liquidity challenges.",
        ),
        event(
            "2022 Rate Hike Fears",
            "Jan-Feb 2022",
            (17.0, 36.0, 28.0),
            (25, 40),
            "Markets reacted to signals of aggressive Fed rate hikes to combat inflation, \
             particularly affecting growth stocks.",
        ),
    ]
}

/// Looks an event up by name (case-insensitive, also matches on a substring
/// such as "covid" or "2008").
pub fn find_event(name: &str) -> VixResult<HistoricalEvent> {
    let needle = name.trim().to_lowercase();
    let catalog = historical_events();

    if let Some(exact) = catalog.iter().find(|e| e.name.to_lowercase() == needle) {
        return Ok(exact.clone());
    }

    let mut matches = catalog
        .into_iter()
        .filter(|e| e.name.to_lowercase().contains(&needle));
    match (matches.next(), matches.next()) {
        (Some(found), None) => Ok(found),
        (Some(_), Some(_)) => Err(VixError::invalid_parameter(format!(
            "event name '{}' is ambiguous",
            name
        ))),
        _ => Err(VixError::invalid_parameter(format!(
            "unknown historical event '{}'",
            name
        ))),
    }
}
