// src/models/replay/generator.rs

//! Three-phase event path.
//!
//! ```text
//! pre-event  (20 days):                  pre  + 0.05 * pre * z
//! buildup    (days_to_peak days):        lin  + 0.07 * lin * z,  lin = pre  + p * (peak - pre)
//! cooldown   (days_to_normalize + 20):   lin  + 0.10 * lin * z,  lin = peak - p * (peak - post)
//! ```
//!
//! `p = (i + 1) / phase_len` for the buildup and `min(1, (i + 1) / days_to_normalize)`
//! for the cooldown, so the last 20 days hover around the post-event level.
//! Unlike the path simulators no floor is applied.

use rand::RngCore;
use tracing::debug;

use super::events::HistoricalEvent;
use crate::error::{VixError, VixResult};
use crate::models::utils::standard_normal;

/// Days shown before the event starts (offsets -20..=-1)
pub const PRE_EVENT_DAYS: usize = 20;
/// Extra days shown after the normalization period ends
pub const POST_EVENT_TAIL_DAYS: usize = 20;

const PRE_EVENT_NOISE: f64 = 0.05;
const BUILDUP_NOISE: f64 = 0.07;
const COOLDOWN_NOISE: f64 = 0.1;

/// A replayed event: day offsets relative to the event start and VIX values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventReplay {
    pub event_name: String,
    pub day_offsets: Vec<i64>,
    pub vix: Vec<f64>,
}

impl EventReplay {
    pub fn len(&self) -> usize {
        self.day_offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.day_offsets.is_empty()
    }

    /// `(offset, vix)` of the highest replayed value
    pub fn realized_peak(&self) -> Option<(i64, f64)> {
        self.day_offsets
            .iter()
            .copied()
            .zip(self.vix.iter().copied())
            .fold(None, |best, (day, v)| match best {
                Some((_, b)) if b >= v => best,
                _ => Some((day, v)),
            })
    }
}

/// Total number of points a replay of `event` contains.
pub fn replay_len(event: &HistoricalEvent) -> usize {
    PRE_EVENT_DAYS + event.days_to_peak + event.days_to_normalize + POST_EVENT_TAIL_DAYS
}

/// Generates the replay of `event`.
///
/// Fails with [`VixError::LengthMismatch`] if the day axis and the generated
/// values ever disagree in length; the series are never silently truncated.
pub fn replay_event(event: &HistoricalEvent, rng: &mut dyn RngCore) -> VixResult<EventReplay> {
    event.validate()?;

    let days_after = event.days_to_normalize + POST_EVENT_TAIL_DAYS;
    let start = -(PRE_EVENT_DAYS as i64);
    let end = (event.days_to_peak + days_after) as i64;
    let day_offsets: Vec<i64> = (start..end).collect();

    let mut vix = Vec::with_capacity(day_offsets.len());

    for _ in 0..PRE_EVENT_DAYS {
        let noise = PRE_EVENT_NOISE * event.pre_vix * standard_normal(rng);
        vix.push(event.pre_vix + noise);
    }

    let buildup_len = event.days_to_peak as f64;
    for i in 0..event.days_to_peak {
        let progress = (i + 1) as f64 / buildup_len;
        let linear = event.pre_vix + progress * (event.peak_vix - event.pre_vix);
        vix.push(linear + BUILDUP_NOISE * linear * standard_normal(rng));
    }

    let normalize_len = event.days_to_normalize as f64;
    for i in 0..days_after {
        let progress = ((i + 1) as f64 / normalize_len).min(1.0);
        let linear = event.peak_vix - progress * (event.peak_vix - event.post_vix);
        vix.push(linear + COOLDOWN_NOISE * linear * standard_normal(rng));
    }

    if day_offsets.len() != vix.len() {
        return Err(VixError::LengthMismatch {
            axis: day_offsets.len(),
            values: vix.len(),
        });
    }

    debug!(event = %event.name, points = vix.len(), "event replay generated");
    Ok(EventReplay {
        event_name: event.name.clone(),
        day_offsets,
        vix,
    })
}
