//! Orbit engine - iterates a map from a starting value.
//!
//! Iteration stops when two consecutive iterates agree within the configured
//! tolerance, when the orbit reaches its length cap, or fails as soon as an
//! iterate leaves the horizontal bound range.

pub mod path;

use crate::config::OrbitConfig;
use crate::domain::Domain;
use crate::error::{CobwebError, Result};
use crate::map::MapFunction;

pub use path::{build_path, markers, CobwebPath};

/// Why an orbit stopped growing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The last iterate and its image agree within tolerance.
    Converged,
    /// The length cap was reached (cycle or chaotic orbit).
    Capped,
}

/// Ordered iterates `x0, f(x0), f(f(x0)), ...`.
#[derive(Debug, Clone, PartialEq)]
pub struct Orbit {
    values: Vec<f64>,
    termination: Termination,
}

impl Orbit {
    /// Iterate values in order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Why iteration stopped.
    pub fn termination(&self) -> Termination {
        self.termination
    }

    /// Number of iterates, starting value included.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false; an orbit holds at least its starting value.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Starting value.
    pub fn start(&self) -> f64 {
        self.values[0]
    }

    /// Last iterate.
    pub fn last(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// Whether iteration stopped at an approximate fixed point.
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }

    /// One value per line, for copying and printing.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for v in &self.values {
            text.push_str(&format!("{}\n", v));
        }
        text
    }
}

/// Iterate `f` from `x0` within `domain`.
pub fn compute_orbit(
    f: &MapFunction,
    x0: f64,
    domain: &Domain,
    config: &OrbitConfig,
) -> Result<Orbit> {
    let mut values = vec![x0];
    let termination = loop {
        let x = values[values.len() - 1];
        let y = f.evaluate(x);
        if !domain.contains_x(y) {
            return Err(CobwebError::out_of_bounds(y, domain.x_bounds()));
        }
        if (x - y).abs() < config.tolerance {
            break Termination::Converged;
        }
        if values.len() > config.max_iterations {
            break Termination::Capped;
        }
        values.push(y);
    };
    Ok(Orbit {
        values,
        termination,
    })
}
