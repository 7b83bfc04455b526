//! Plotting region and orbit bounds.

use crate::error::{CobwebError, Result};

/// Rectangular region used for axis extents and as the orbit bound test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Default for Domain {
    fn default() -> Self {
        Self {
            x_min: 0.0,
            x_max: 1.0,
            y_min: 0.0,
            y_max: 1.0,
        }
    }
}

impl Domain {
    /// Create a domain, rejecting empty, inverted or non-finite extents.
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self> {
        if ![x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite()) {
            return Err(CobwebError::invalid_domain("extents must be finite"));
        }
        if x_min >= x_max {
            return Err(CobwebError::invalid_domain(format!(
                "x_min ({}) must be below x_max ({})",
                x_min, x_max
            )));
        }
        if y_min >= y_max {
            return Err(CobwebError::invalid_domain(format!(
                "y_min ({}) must be below y_max ({})",
                y_min, y_max
            )));
        }
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    /// Lower horizontal extent.
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    /// Upper horizontal extent.
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Lower vertical extent.
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    /// Upper vertical extent.
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    /// Horizontal bound pair; iterates must stay inside it.
    pub fn x_bounds(&self) -> (f64, f64) {
        (self.x_min, self.x_max)
    }

    /// Vertical bound pair.
    pub fn y_bounds(&self) -> (f64, f64) {
        (self.y_min, self.y_max)
    }

    /// Horizontal extent.
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Whether `x` lies within the closed horizontal range. NaN never does.
    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.x_min && x <= self.x_max
    }

    /// Clamp `x` into the horizontal range.
    pub fn clamp_x(&self, x: f64) -> f64 {
        x.clamp(self.x_min, self.x_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unit_square() {
        let d = Domain::default();
        assert_eq!(d.x_bounds(), (0.0, 1.0));
        assert_eq!(d.y_bounds(), (0.0, 1.0));
    }

    #[test]
    fn rejects_inverted_extents() {
        assert!(Domain::new(1.0, 0.0, 0.0, 1.0).is_err());
        assert!(Domain::new(0.0, 1.0, 2.0, 2.0).is_err());
        assert!(Domain::new(0.0, f64::INFINITY, 0.0, 1.0).is_err());
        assert!(Domain::new(f64::NAN, 1.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn contains_x_is_closed_and_rejects_nan() {
        let d = Domain::new(-1.0, 1.0, 0.0, 1.0).unwrap();
        assert!(d.contains_x(-1.0));
        assert!(d.contains_x(1.0));
        assert!(!d.contains_x(1.0001));
        assert!(!d.contains_x(f64::NAN));
        assert_eq!(d.clamp_x(3.0), 1.0);
        assert_eq!(d.width(), 2.0);
    }
}
