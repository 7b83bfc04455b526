//! Handles to the drawables the controller keeps updating.

use crate::render::{Renderer, SeriesKind};

/// One optional handle per drawable; `None` until first drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderHandles<H> {
    /// Sampled map curve.
    pub curve: Option<H>,
    /// Identity line.
    pub identity: Option<H>,
    /// Cobweb polyline.
    pub path: Option<H>,
    /// Orbit marker dots.
    pub markers: Option<H>,
    /// Position indicator.
    pub indicator: Option<H>,
}

impl<H> Default for RenderHandles<H> {
    fn default() -> Self {
        Self {
            curve: None,
            identity: None,
            path: None,
            markers: None,
            indicator: None,
        }
    }
}

impl<H> RenderHandles<H> {
    /// Drop every handle at once.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether an orbit overlay is on screen.
    pub fn has_orbit(&self) -> bool {
        self.path.is_some() || self.markers.is_some()
    }
}

/// Update the drawable behind `slot`, creating it first if needed.
pub(crate) fn upsert<R: Renderer>(
    renderer: &mut R,
    slot: &mut Option<R::Handle>,
    kind: SeriesKind,
    points: &[(f64, f64)],
) {
    match slot {
        Some(handle) => renderer.update(*handle, points),
        None => *slot = Some(renderer.draw(kind, points)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::PlotSurface;

    #[test]
    fn upsert_creates_once_then_updates() {
        let mut surface = PlotSurface::new();
        let mut handles = RenderHandles::default();

        upsert(&mut surface, &mut handles.indicator, SeriesKind::Indicator, &[(0.1, 0.0)]);
        let first = handles.indicator;
        upsert(&mut surface, &mut handles.indicator, SeriesKind::Indicator, &[(0.2, 0.0)]);

        assert_eq!(handles.indicator, first);
        assert_eq!(surface.len(), 1);
        assert_eq!(
            surface.find(SeriesKind::Indicator).unwrap().points,
            vec![(0.2, 0.0)]
        );
    }

    #[test]
    fn clear_resets_all_slots() {
        let mut surface = PlotSurface::new();
        let mut handles = RenderHandles::default();
        upsert(&mut surface, &mut handles.curve, SeriesKind::Curve, &[]);
        upsert(&mut surface, &mut handles.path, SeriesKind::OrbitPath, &[]);
        assert!(handles.has_orbit());

        handles.clear();
        assert_eq!(handles, RenderHandles::default());
        assert!(!handles.has_orbit());
    }
}
