pub mod expected;
pub mod mean_reversion;
pub mod regime;
pub mod replay;

/// Common traits shared by the stochastic path models
pub mod traits {
    use crate::error::VixResult;
    use crate::simulation::types::SimulatedPath;
    use rand::RngCore;

    /// A stochastic generator of paired VIX / realized-volatility paths.
    ///
    /// The random source is always supplied by the caller so that a seeded
    /// generator reproduces a path bit for bit. The trait is object safe so
    /// that the ensemble pipeline can hold any simulator behind a `Box`.
    pub trait PathSimulator: Send + Sync {
        /// Short model name used in logs and exports (e.g. "mean_reversion")
        fn name(&self) -> &str;

        /// Number of days in every produced path, seed day included
        fn horizon(&self) -> usize;

        /// Checks the simulator parameters without drawing any randomness
        fn validate(&self) -> VixResult<()>;

        /// Generates one path from the supplied random source
        fn simulate(&self, rng: &mut dyn RngCore) -> VixResult<SimulatedPath>;
    }
}

/// Numerical helpers shared by the simulators
pub mod utils {
    use rand::distributions::{Distribution, Standard};
    use rand::RngCore;
    use rand_distr::StandardNormal;

    /// Minimum volatility / VIX level a simulated path may take (in percent).
    ///
    /// The floor is a hard clamp, not a reflecting barrier: any draw that would
    /// land below it is set to exactly `VOL_FLOOR`. Path statistics near the
    /// floor are therefore biased upwards and the lower tail is compressed.
    pub const VOL_FLOOR: f64 = 5.0;

    /// Clamp a simulated level to [`VOL_FLOOR`].
    ///
    /// `f64::max` ignores a NaN operand, so a degenerate draw also lands on the floor.
    #[inline]
    pub fn apply_floor(value: f64) -> f64 {
        value.max(VOL_FLOOR)
    }

    /// One draw from N(0, 1)
    #[inline]
    pub fn standard_normal(rng: &mut dyn RngCore) -> f64 {
        StandardNormal.sample(rng)
    }

    /// One draw from U[0, 1)
    #[inline]
    pub fn uniform(rng: &mut dyn RngCore) -> f64 {
        Standard.sample(rng)
    }

}
