//! Expected-value model
//!
//! Closed-form relationships between recent realized volatility, the VIX and
//! the volatility premium. Given the current inputs the model produces a
//! mean-reversion adjustment, the VIX level that current conditions would
//! justify ("expected VIX"), the deviation of the actual VIX from it, and a
//! one-step forecast of the change in realized volatility.

pub mod model;
pub mod types;

pub use model::*;
pub use types::*;
