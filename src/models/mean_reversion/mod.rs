//! Single-path mean-reverting VIX / realized-volatility simulator

pub mod simulator;

pub use simulator::*;
