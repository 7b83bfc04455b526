//! Named maps selectable from the command line.

use std::f64::consts::PI;

use clap::ValueEnum;

use super::MapFunction;

/// Built-in maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MapKind {
    /// Logistic family `r x (1 - x)`.
    #[default]
    Logistic,
    /// Tent family `mu min(x, 1 - x)`.
    Tent,
    /// Sine family `r sin(pi x)`.
    Sine,
    /// Cubic family `r x (1 - x^2)`.
    Cubic,
    /// Doubling map `2x` (fixed).
    Doubling,
    /// Cosine map `cos x` (fixed).
    Cosine,
}

impl MapKind {
    /// Get the map name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Logistic => "logistic",
            Self::Tent => "tent",
            Self::Sine => "sine",
            Self::Cubic => "cubic",
            Self::Doubling => "doubling",
            Self::Cosine => "cosine",
        }
    }

    /// Formula shown in help and titles.
    pub fn formula(self) -> &'static str {
        match self {
            Self::Logistic => "r·x·(1−x)",
            Self::Tent => "μ·min(x, 1−x)",
            Self::Sine => "r·sin(πx)",
            Self::Cubic => "r·x·(1−x²)",
            Self::Doubling => "2x",
            Self::Cosine => "cos x",
        }
    }

    /// Starting parameter for families, `None` for fixed maps.
    pub fn default_parameter(self) -> Option<f64> {
        match self {
            Self::Logistic => Some(3.7),
            Self::Tent => Some(1.5),
            Self::Sine => Some(0.9),
            Self::Cubic => Some(2.5),
            Self::Doubling | Self::Cosine => None,
        }
    }

    /// Build the map. `parameter` overrides the default for families and is
    /// ignored for fixed maps.
    pub fn build(self, parameter: Option<f64>) -> MapFunction {
        let p = parameter.or(self.default_parameter()).unwrap_or_default();
        match self {
            Self::Logistic => MapFunction::family(self.name(), p, |x, r| r * x * (1.0 - x)),
            Self::Tent => MapFunction::family(self.name(), p, |x, mu| mu * x.min(1.0 - x)),
            Self::Sine => MapFunction::family(self.name(), p, |x, r| r * (PI * x).sin()),
            Self::Cubic => MapFunction::family(self.name(), p, |x, r| r * x * (1.0 - x * x)),
            Self::Doubling => MapFunction::fixed(self.name(), |x| 2.0 * x),
            Self::Cosine => MapFunction::fixed(self.name(), f64::cos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_use_default_parameter() {
        let f = MapKind::Logistic.build(None);
        assert_eq!(f.parameter(), Some(3.7));
        assert!((f.evaluate(0.2) - 0.592).abs() < 1e-12);
    }

    #[test]
    fn parameter_override_applies_to_families_only() {
        let tent = MapKind::Tent.build(Some(2.0));
        assert_eq!(tent.parameter(), Some(2.0));
        assert!((tent.evaluate(0.25) - 0.5).abs() < 1e-12);
        assert!((tent.evaluate(0.75) - 0.5).abs() < 1e-12);

        let doubling = MapKind::Doubling.build(Some(9.0));
        assert_eq!(doubling.parameter(), None);
        assert_eq!(doubling.evaluate(0.3), 0.6);
    }

    #[test]
    fn fixed_maps_have_no_default_parameter() {
        for kind in MapKind::value_variants() {
            assert_eq!(
                kind.default_parameter().is_some(),
                kind.build(None).is_adjustable(),
                "{}",
                kind.name()
            );
        }
    }
}
