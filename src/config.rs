use crate::filters::{CoefficientError, CoefficientSet, GRAVITY, SMOOTHING};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    InvalidGravityFilter(CoefficientError),
    InvalidSmoothingFilter(CoefficientError),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvalidGravityFilter(err) => write!(f, "gravity filter: {}", err),
            ConfigError::InvalidSmoothingFilter(err) => write!(f, "smoothing filter: {}", err),
        }
    }
}

impl core::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            ConfigError::InvalidGravityFilter(err) | ConfigError::InvalidSmoothingFilter(err) => {
                Some(err)
            }
        }
    }
}

/// Filter coefficients for the two filtering stages.
///
/// Both default sets are designed for a 100 Hz sample rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Low-pass separating gravity from total acceleration (combined input only).
    pub gravity: CoefficientSet,
    /// Low-pass applied to the gravity projection.
    pub smoothing: CoefficientSet,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            smoothing: SMOOTHING,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gravity
            .validate()
            .map_err(ConfigError::InvalidGravityFilter)?;

        self.smoothing
            .validate()
            .map_err(ConfigError::InvalidSmoothingFilter)?;

        Ok(())
    }
}
