//! Retained-mode plot surface for the terminal front end.

use super::{Renderer, SeriesKind};

/// Handle to a series on a [`PlotSurface`].
///
/// Carries the surface generation so handles from before a `clear` are
/// recognised as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesId {
    generation: u64,
    index: usize,
}

/// A drawable series.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// What the series represents.
    pub kind: SeriesKind,
    /// Data points in domain coordinates.
    pub points: Vec<(f64, f64)>,
}

/// In-memory drawables, painted by `ui::plot` every frame.
#[derive(Debug, Default)]
pub struct PlotSurface {
    series: Vec<Series>,
    generation: u64,
    closed: bool,
}

impl PlotSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Series in paint order.
    pub fn layers(&self) -> Vec<&Series> {
        let mut layers: Vec<&Series> = self.series.iter().collect();
        layers.sort_by_key(|s| s.kind.layer());
        layers
    }

    /// Number of live series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether the surface holds no series.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// First series of the given kind.
    pub fn find(&self, kind: SeriesKind) -> Option<&Series> {
        self.series.iter().find(|s| s.kind == kind)
    }
}

impl Renderer for PlotSurface {
    type Handle = SeriesId;

    fn draw(&mut self, kind: SeriesKind, points: &[(f64, f64)]) -> SeriesId {
        self.series.push(Series {
            kind,
            points: points.to_vec(),
        });
        SeriesId {
            generation: self.generation,
            index: self.series.len() - 1,
        }
    }

    fn update(&mut self, handle: SeriesId, points: &[(f64, f64)]) {
        if handle.generation != self.generation {
            tracing::warn!("Ignoring update through stale handle {:?}", handle);
            return;
        }
        match self.series.get_mut(handle.index) {
            Some(series) => series.points = points.to_vec(),
            None => tracing::warn!("Ignoring update through unknown handle {:?}", handle),
        }
    }

    fn clear(&mut self) {
        self.series.clear();
        self.generation += 1;
    }

    fn close(&mut self) {
        self.closed = true;
    }

    fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_replaces_points_in_place() {
        let mut surface = PlotSurface::new();
        let id = surface.draw(SeriesKind::Indicator, &[(0.1, 0.0), (0.1, 1.0)]);
        surface.update(id, &[(0.7, 0.0), (0.7, 1.0)]);
        assert_eq!(surface.len(), 1);
        assert_eq!(
            surface.find(SeriesKind::Indicator).unwrap().points,
            vec![(0.7, 0.0), (0.7, 1.0)]
        );
    }

    #[test]
    fn clear_invalidates_old_handles() {
        let mut surface = PlotSurface::new();
        let old = surface.draw(SeriesKind::Curve, &[(0.0, 0.0)]);
        surface.clear();
        assert!(surface.is_empty());

        let fresh = surface.draw(SeriesKind::Identity, &[(0.0, 0.0), (1.0, 1.0)]);
        surface.update(old, &[(5.0, 5.0)]);
        assert_ne!(old, fresh);
        assert_eq!(
            surface.find(SeriesKind::Identity).unwrap().points,
            vec![(0.0, 0.0), (1.0, 1.0)]
        );
    }

    #[test]
    fn layers_put_orbit_above_curve() {
        let mut surface = PlotSurface::new();
        surface.draw(SeriesKind::OrbitMarkers, &[]);
        surface.draw(SeriesKind::Curve, &[]);
        surface.draw(SeriesKind::Identity, &[]);
        let kinds: Vec<SeriesKind> = surface.layers().iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SeriesKind::Identity,
                SeriesKind::Curve,
                SeriesKind::OrbitMarkers
            ]
        );
    }

    #[test]
    fn close_is_sticky() {
        let mut surface = PlotSurface::new();
        assert!(!surface.is_closed());
        surface.close();
        assert!(surface.is_closed());
    }
}
