//! Cobweb path construction.

use super::Orbit;

/// Stair-step polyline between the curve and the identity line.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CobwebPath {
    /// Horizontal coordinates.
    pub xs: Vec<f64>,
    /// Vertical coordinates, same length as `xs`.
    pub ys: Vec<f64>,
}

impl CobwebPath {
    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Whether the path has no vertices.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Vertices as `(x, y)` pairs.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.xs.iter().copied().zip(self.ys.iter().copied()).collect()
    }
}

/// Build the cobweb polyline for `orbit`.
///
/// Each step `(x_i, x_i) -> (x_i, x_{i+1})` is a vertical move to the curve;
/// the following vertex supplies the horizontal move back to the diagonal.
/// An orbit of length `n` yields `2n - 1` vertices.
pub fn build_path(orbit: &Orbit) -> CobwebPath {
    let values = orbit.values();
    let n = values.len();
    let mut xs = Vec::with_capacity(2 * n);
    let mut ys = Vec::with_capacity(2 * n);

    for pair in values.windows(2) {
        xs.push(pair[0]);
        xs.push(pair[0]);
        ys.push(pair[0]);
        ys.push(pair[1]);
    }
    if let Some(&last) = values.last() {
        xs.push(last);
        ys.push(last);
    }

    CobwebPath { xs, ys }
}

/// Orbit values as dots on the identity line.
pub fn markers(orbit: &Orbit) -> Vec<(f64, f64)> {
    orbit.values().iter().map(|&v| (v, v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OrbitConfig;
    use crate::domain::Domain;
    use crate::map::MapFunction;
    use crate::orbit::compute_orbit;

    fn orbit_of(f: MapFunction, x0: f64) -> Orbit {
        compute_orbit(&f, x0, &Domain::default(), &OrbitConfig::default()).unwrap()
    }

    #[test]
    fn single_point_orbit_degenerates_to_point() {
        let orbit = orbit_of(MapFunction::fixed("identity", |x| x), 0.4);
        let path = build_path(&orbit);
        assert_eq!(path.xs, vec![0.4]);
        assert_eq!(path.ys, vec![0.4]);
        assert_eq!(markers(&orbit), vec![(0.4, 0.4)]);
    }

    #[test]
    fn staircase_vertices_alternate_curve_and_diagonal() {
        let config = OrbitConfig {
            tolerance: 0.2,
            max_iterations: 500,
        };
        let f = MapFunction::fixed("half", |x| x / 2.0);
        let orbit = compute_orbit(&f, 1.0, &Domain::default(), &config).unwrap();
        let path = build_path(&orbit);
        assert_eq!(path.xs, vec![1.0, 1.0, 0.5, 0.5, 0.25]);
        assert_eq!(path.ys, vec![1.0, 0.5, 0.5, 0.25, 0.25]);
        assert_eq!(
            path.points(),
            vec![(1.0, 1.0), (1.0, 0.5), (0.5, 0.5), (0.5, 0.25), (0.25, 0.25)]
        );
    }

    #[test]
    fn path_length_is_two_n_minus_one_and_deterministic() {
        let orbit = orbit_of(
            MapFunction::family("logistic", 3.7, |x, r| r * x * (1.0 - x)),
            0.2,
        );
        let first = build_path(&orbit);
        let second = build_path(&orbit);
        assert_eq!(first.len(), 2 * orbit.len() - 1);
        assert_eq!(first.ys.len(), first.xs.len());
        assert_eq!(first, second);
        assert_eq!(markers(&orbit).len(), orbit.len());
    }
}
