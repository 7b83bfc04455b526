//! Interaction controller - maps input events to orbit and render updates.
//!
//! The controller owns the active map, the current orbit and the handles to
//! everything it has drawn. All work happens synchronously inside
//! [`Controller::handle`]; a rejected orbit never touches the display.

pub mod handles;

use ndarray::Array1;

use crate::config::Config;
use crate::domain::Domain;
use crate::error::{CobwebError, Result};
use crate::map::MapFunction;
use crate::orbit::{build_path, compute_orbit, markers, Orbit, Termination};
use crate::render::{Renderer, SeriesKind};

pub use handles::RenderHandles;
use handles::upsert;

/// Pointer button that produced a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Primary button (also used for keyboard selection).
    Left,
    /// Middle button.
    Middle,
    /// Secondary button.
    Right,
}

/// Keys the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKey {
    /// End the session.
    Escape,
    /// Raise the map parameter.
    Up,
    /// Lower the map parameter.
    Down,
}

/// Input event. `x` is the domain coordinate under the pointer, `None` when
/// the pointer is outside the plot region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlotEvent {
    /// Pointer moved.
    PointerMove {
        /// Domain coordinate, if inside the plot.
        x: Option<f64>,
    },
    /// Pointer button pressed.
    PointerClick {
        /// Domain coordinate, if inside the plot.
        x: Option<f64>,
        /// Which button.
        button: PointerButton,
    },
    /// Key pressed.
    KeyPress(PlotKey),
}

/// Session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Curve and identity line shown, no orbit.
    Idle,
    /// An orbit overlay is shown.
    OrbitShown,
    /// Session closed; events are ignored.
    Terminated,
}

/// Outcome of handling one event.
#[derive(Debug)]
pub enum Response {
    /// Nothing changed.
    Ignored,
    /// Position indicator moved to `x`.
    IndicatorMoved(f64),
    /// A new orbit replaced the overlay.
    OrbitDrawn {
        /// Starting value.
        start: f64,
        /// Orbit length, starting value included.
        len: usize,
        /// Last iterate.
        last: f64,
        /// Why iteration stopped.
        termination: Termination,
    },
    /// The orbit left the bounds; the display is unchanged.
    Rejected(CobwebError),
    /// Parameter changed and the plot was redrawn from scratch.
    Redrawn {
        /// New parameter value.
        parameter: f64,
    },
    /// Session ended.
    Closed,
}

/// Event-driven cobweb session over a renderer.
#[derive(Debug)]
pub struct Controller<R: Renderer> {
    function: MapFunction,
    domain: Domain,
    config: Config,
    renderer: R,
    handles: RenderHandles<R::Handle>,
    orbit: Option<Orbit>,
    indicator_x: Option<f64>,
    state: SessionState,
}

impl<R: Renderer> Controller<R> {
    /// Create a session and draw the curve and identity line.
    pub fn new(function: MapFunction, domain: Domain, config: Config, renderer: R) -> Self {
        let mut controller = Self {
            function,
            domain,
            config,
            renderer,
            handles: RenderHandles::default(),
            orbit: None,
            indicator_x: None,
            state: SessionState::Idle,
        };
        controller.redraw();
        controller
    }

    /// Dispatch one event.
    pub fn handle(&mut self, event: PlotEvent) -> Response {
        if self.state == SessionState::Terminated {
            tracing::debug!("Session terminated, dropping {:?}", event);
            return Response::Ignored;
        }
        tracing::debug!("Handling {:?}", event);

        match event {
            PlotEvent::PointerMove { x: Some(x) } => {
                self.show_indicator(x);
                Response::IndicatorMoved(x)
            }
            PlotEvent::PointerMove { x: None } | PlotEvent::PointerClick { x: None, .. } => {
                Response::Ignored
            }
            PlotEvent::PointerClick { x: Some(x), .. } => match self.run(x) {
                Ok(orbit) => Response::OrbitDrawn {
                    start: orbit.start(),
                    len: orbit.len(),
                    last: orbit.last(),
                    termination: orbit.termination(),
                },
                Err(err) => {
                    tracing::warn!("Orbit from {} rejected: {}", x, err);
                    Response::Rejected(err)
                }
            },
            PlotEvent::KeyPress(PlotKey::Escape) => {
                self.close();
                Response::Closed
            }
            PlotEvent::KeyPress(PlotKey::Up) => self.adjust_parameter(true),
            PlotEvent::KeyPress(PlotKey::Down) => self.adjust_parameter(false),
        }
    }

    /// Compute the orbit from `x0` and draw it.
    ///
    /// On error nothing is redrawn and the previous orbit stays in place.
    fn run(&mut self, x0: f64) -> Result<&Orbit> {
        let orbit = compute_orbit(&self.function, x0, &self.domain, &self.config.orbit)?;
        let path = build_path(&orbit);
        upsert(
            &mut self.renderer,
            &mut self.handles.path,
            SeriesKind::OrbitPath,
            &path.points(),
        );
        upsert(
            &mut self.renderer,
            &mut self.handles.markers,
            SeriesKind::OrbitMarkers,
            &markers(&orbit),
        );
        tracing::info!(
            "Orbit from {} drawn: {} iterates ({:?})",
            x0,
            orbit.len(),
            orbit.termination()
        );
        self.state = SessionState::OrbitShown;
        let orbit: &Orbit = self.orbit.insert(orbit);
        Ok(orbit)
    }

    /// Move the position indicator to `x`.
    fn show_indicator(&mut self, x: f64) {
        let (y_min, y_max) = self.domain.y_bounds();
        upsert(
            &mut self.renderer,
            &mut self.handles.indicator,
            SeriesKind::Indicator,
            &[(x, y_min), (x, y_max)],
        );
        self.indicator_x = Some(x);
    }

    /// Swap the active map; clears the orbit and redraws everything.
    ///
    /// Does nothing once the session is terminated.
    pub fn replace_function(&mut self, function: MapFunction) {
        if self.state == SessionState::Terminated {
            tracing::debug!("Session terminated, keeping map {}", self.function.name());
            return;
        }
        tracing::info!("Replacing map {} with {}", self.function.name(), function.name());
        self.function = function;
        self.redraw();
    }

    /// Clear the surface and draw the curve and identity line again.
    ///
    /// Does nothing once the session is terminated.
    pub fn redraw(&mut self) {
        if self.state == SessionState::Terminated {
            tracing::debug!("Session terminated, skipping redraw");
            return;
        }
        self.renderer.clear();
        self.handles.clear();
        self.orbit = None;
        self.indicator_x = None;

        let xs = Array1::linspace(
            self.domain.x_min(),
            self.domain.x_max(),
            self.config.plot.samples,
        );
        let curve: Vec<(f64, f64)> = xs
            .iter()
            .map(|&x| (x, self.function.evaluate(x)))
            .filter(|(_, y)| y.is_finite())
            .collect();
        let identity: Vec<(f64, f64)> = xs.iter().map(|&x| (x, x)).collect();

        upsert(&mut self.renderer, &mut self.handles.curve, SeriesKind::Curve, &curve);
        upsert(
            &mut self.renderer,
            &mut self.handles.identity,
            SeriesKind::Identity,
            &identity,
        );
        self.state = SessionState::Idle;
    }

    /// End the session.
    pub fn close(&mut self) {
        tracing::info!("Closing session");
        self.renderer.close();
        self.state = SessionState::Terminated;
    }

    fn adjust_parameter(&mut self, up: bool) -> Response {
        let step = self.config.plot.parameter_step;
        let changed = if up {
            self.function.increase_parameter(step)
        } else {
            self.function.decrease_parameter(step)
        };
        match (changed, self.function.parameter()) {
            (true, Some(parameter)) => {
                tracing::info!("Parameter of {} now {}", self.function.name(), parameter);
                self.redraw();
                Response::Redrawn { parameter }
            }
            _ => Response::Ignored,
        }
    }

    /// Active map.
    pub fn function(&self) -> &MapFunction {
        &self.function
    }

    /// Plot domain.
    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Active configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Orbit currently shown.
    pub fn orbit(&self) -> Option<&Orbit> {
        self.orbit.as_ref()
    }

    /// Position of the indicator, if shown.
    pub fn indicator_x(&self) -> Option<f64> {
        self.indicator_x
    }

    /// Session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Handles to the drawables on screen.
    pub fn handles(&self) -> &RenderHandles<R::Handle> {
        &self.handles
    }

    /// The renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
