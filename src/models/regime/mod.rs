//! Regime-conditioned market scenario simulator
//!
//! A market trend (bull, bear, sideways, crash) fixes the baseline volatility
//! and a daily drift; a volatility regime scales the baseline. The path then
//! follows a mean-reverting recurrence towards 15% with random event shocks.

pub mod simulator;
pub mod types;

pub use simulator::*;
pub use types::*;
