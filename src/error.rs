//! Error types for vix-lib

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VixError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Length mismatch: axis has {axis} points but values has {values}")]
    LengthMismatch { axis: usize, values: usize },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type VixResult<T> = Result<T, VixError>;

impl VixError {
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Rejects NaN and infinite values, naming the offending parameter.
pub(crate) fn ensure_finite(name: &str, value: f64) -> VixResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(VixError::invalid_parameter(format!(
            "{} must be finite, got {}",
            name, value
        )))
    }
}

/// Rejects values that are not finite and strictly positive.
pub(crate) fn ensure_positive(name: &str, value: f64) -> VixResult<()> {
    ensure_finite(name, value)?;
    if value <= 0.0 {
        return Err(VixError::invalid_parameter(format!(
            "{} must be > 0, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Mean-reversion speed must lie in (0, 1] to keep the one-step recurrence stable.
pub(crate) fn ensure_speed(value: f64) -> VixResult<()> {
    ensure_finite("mean_rev_speed", value)?;
    if value <= 0.0 || value > 1.0 {
        return Err(VixError::invalid_parameter(format!(
            "mean_rev_speed must be in (0, 1], got {}",
            value
        )));
    }
    Ok(())
}

pub(crate) fn ensure_nonzero_len(name: &str, value: usize) -> VixResult<()> {
    if value == 0 {
        return Err(VixError::invalid_parameter(format!("{} must be >= 1", name)));
    }
    Ok(())
}
