//! Configuration defaults for orbit iteration and plotting.

use crate::error::{CobwebError, Result};
use crate::map::DEFAULT_PARAMETER_STEP;

/// Configuration for orbit iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitConfig {
    /// Consecutive iterates closer than this count as converged.
    pub tolerance: f64,
    /// Orbits stop once they hold more than this many iterates.
    pub max_iterations: usize,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-3,
            max_iterations: 500,
        }
    }
}

impl OrbitConfig {
    /// Longest orbit this configuration can produce, starting value included.
    pub fn max_len(&self) -> usize {
        self.max_iterations + 1
    }
}

/// Configuration for the plot view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotConfig {
    /// Number of samples used to draw the curve and the identity line.
    pub samples: usize,
    /// Amount the parameter moves per Up/Down key press.
    pub parameter_step: f64,
    /// Number of keyboard cursor positions across the domain width.
    pub cursor_steps: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            samples: 400,
            parameter_step: DEFAULT_PARAMETER_STEP,
            cursor_steps: 200,
        }
    }
}

/// Combined configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Config {
    /// Orbit iteration settings.
    pub orbit: OrbitConfig,
    /// Plot view settings.
    pub plot: PlotConfig,
}

impl Config {
    /// Check that every value is usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.orbit.tolerance.is_finite() && self.orbit.tolerance > 0.0) {
            return Err(CobwebError::invalid_config("tolerance must be positive"));
        }
        if self.plot.samples < 2 {
            return Err(CobwebError::invalid_config(
                "at least 2 curve samples are required",
            ));
        }
        if !(self.plot.parameter_step.is_finite() && self.plot.parameter_step > 0.0) {
            return Err(CobwebError::invalid_config(
                "parameter step must be positive",
            ));
        }
        if self.plot.cursor_steps == 0 {
            return Err(CobwebError::invalid_config("cursor steps must be non-zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_cobweb_settings() {
        let config = Config::default();
        assert_eq!(config.orbit.tolerance, 1e-3);
        assert_eq!(config.orbit.max_iterations, 500);
        assert_eq!(config.orbit.max_len(), 501);
        assert_eq!(config.plot.samples, 400);
        assert_eq!(config.plot.parameter_step, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_degenerate_values() {
        let mut config = Config::default();
        config.orbit.tolerance = 0.0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.plot.samples = 1;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.plot.parameter_step = -0.1;
        assert!(config.validate().is_err());
    }
}
