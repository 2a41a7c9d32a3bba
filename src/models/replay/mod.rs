//! Historical-event VIX replay
//!
//! Stylised reconstructions of how the VIX behaved around well-known market
//! events: a calm pre-event window, a linear buildup to the peak and a linear
//! normalization towards the post-event level, each with proportional noise.

pub mod events;
pub mod generator;

pub use events::*;
pub use generator::*;
