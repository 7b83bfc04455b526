//! Renderer seam - the drawing commands the controller issues.
//!
//! The controller never touches the terminal. It asks a [`Renderer`] to
//! draw a series (getting a handle back), to update a series in place, to
//! clear everything, or to close the session. [`surface::PlotSurface`] keeps
//! the series in memory for the ratatui front end to paint each frame.

pub mod surface;

use std::fmt;

pub use surface::PlotSurface;

/// What a drawable represents; decides how it is styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    /// The sampled map `y = f(x)`.
    Curve,
    /// The diagonal `y = x`.
    Identity,
    /// Stair-step cobweb polyline.
    OrbitPath,
    /// Orbit values as dots on the diagonal.
    OrbitMarkers,
    /// Vertical line under the pointer.
    Indicator,
}

impl SeriesKind {
    /// Whether the series is drawn as separate points rather than a polyline.
    pub fn is_scatter(self) -> bool {
        matches!(self, Self::OrbitMarkers)
    }

    /// Paint order; higher is drawn later.
    pub fn layer(self) -> u8 {
        match self {
            Self::Identity => 0,
            Self::Curve => 1,
            Self::Indicator => 2,
            Self::OrbitPath => 3,
            Self::OrbitMarkers => 4,
        }
    }
}

/// Drawing surface driven by the interaction controller.
pub trait Renderer {
    /// Reference to a drawable owned by the renderer.
    type Handle: Copy + PartialEq + fmt::Debug;

    /// Create a new drawable and return its handle.
    fn draw(&mut self, kind: SeriesKind, points: &[(f64, f64)]) -> Self::Handle;

    /// Replace the data of an existing drawable.
    fn update(&mut self, handle: Self::Handle, points: &[(f64, f64)]);

    /// Remove every drawable. Handles issued before are no longer valid.
    fn clear(&mut self);

    /// End the session.
    fn close(&mut self);

    /// Whether [`Renderer::close`] has been called.
    fn is_closed(&self) -> bool;
}
