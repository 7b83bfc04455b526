//! Map functions - the scalar maps iterated by the orbit engine.
//!
//! A map is either a fixed callable or a family `f(x; p)` with an adjustable
//! parameter. Changing the parameter is the only in-place mutation; swapping
//! one map for another goes through the interaction controller.

pub mod catalog;

use std::fmt;

pub use catalog::MapKind;

/// Default amount a family parameter moves per adjustment.
pub const DEFAULT_PARAMETER_STEP: f64 = 0.1;

/// Boxed fixed map `x -> f(x)`.
pub type ScalarFn = Box<dyn Fn(f64) -> f64>;

/// Boxed family map `(x, p) -> f(x; p)`.
pub type FamilyFn = Box<dyn Fn(f64, f64) -> f64>;

/// A scalar map with an optional adjustable parameter.
pub enum MapFunction {
    /// Map with no adjustable parameter.
    Fixed {
        /// Display name.
        name: String,
        /// The map itself.
        f: ScalarFn,
    },
    /// Parametrized family of maps.
    Family {
        /// Display name.
        name: String,
        /// Current parameter value.
        parameter: f64,
        /// The family, called as `f(x, parameter)`.
        f: FamilyFn,
    },
}

impl fmt::Debug for MapFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed { name, .. } => f.debug_struct("Fixed").field("name", name).finish(),
            Self::Family {
                name, parameter, ..
            } => f
                .debug_struct("Family")
                .field("name", name)
                .field("parameter", parameter)
                .finish(),
        }
    }
}

impl MapFunction {
    /// Wrap a fixed map.
    pub fn fixed(name: impl Into<String>, f: impl Fn(f64) -> f64 + 'static) -> Self {
        Self::Fixed {
            name: name.into(),
            f: Box::new(f),
        }
    }

    /// Wrap a family with its initial parameter.
    pub fn family(
        name: impl Into<String>,
        parameter: f64,
        f: impl Fn(f64, f64) -> f64 + 'static,
    ) -> Self {
        Self::Family {
            name: name.into(),
            parameter,
            f: Box::new(f),
        }
    }

    /// Evaluate the map at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Self::Fixed { f, .. } => f(x),
            Self::Family { f, parameter, .. } => f(x, *parameter),
        }
    }

    /// Display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Fixed { name, .. } | Self::Family { name, .. } => name,
        }
    }

    /// Current parameter, if the map has one.
    pub fn parameter(&self) -> Option<f64> {
        match self {
            Self::Fixed { .. } => None,
            Self::Family { parameter, .. } => Some(*parameter),
        }
    }

    /// Whether the parameter can be adjusted.
    pub fn is_adjustable(&self) -> bool {
        matches!(self, Self::Family { .. })
    }

    /// Raise the parameter by `step`. Returns false for fixed maps.
    pub fn increase_parameter(&mut self, step: f64) -> bool {
        self.shift_parameter(step)
    }

    /// Lower the parameter by `step`. Returns false for fixed maps.
    pub fn decrease_parameter(&mut self, step: f64) -> bool {
        self.shift_parameter(-step)
    }

    fn shift_parameter(&mut self, delta: f64) -> bool {
        match self {
            Self::Fixed { .. } => false,
            Self::Family { parameter, .. } => {
                *parameter += delta;
                true
            }
        }
    }

    /// Short label for titles, e.g. `logistic (p = 3.700)`.
    pub fn label(&self) -> String {
        match self.parameter() {
            Some(p) => format!("{} (p = {:.3})", self.name(), p),
            None => self.name().to_string(),
        }
    }
}
