//! Application state and logic.

use ratatui::layout::Rect;

use crate::clipboard;
use crate::config::Config;
use crate::domain::Domain;
use crate::interaction::{Controller, PlotEvent, PlotKey, PointerButton, Response};
use crate::map::MapFunction;
use crate::orbit::Termination;
use crate::render::{PlotSurface, Renderer};
use crate::ui::format_value;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Cobweb session drawing into the terminal surface.
    pub controller: Controller<PlotSurface>,
    /// Formula shown next to the map name, if known.
    pub formula: Option<String>,
    /// Status message.
    pub status: String,
    /// Whether the status message reports a failure.
    pub status_is_error: bool,
    /// Current theme.
    pub theme: Theme,
    /// Inner plot area from the last frame; `None` before the first draw.
    pub plot_area: Option<Rect>,
}

impl App {
    /// Create a new application instance.
    pub fn new(function: MapFunction, domain: Domain, config: Config) -> Self {
        Self {
            controller: Controller::new(function, domain, config, PlotSurface::new()),
            formula: None,
            status: "Click the plot to trace an orbit".to_string(),
            status_is_error: false,
            theme: Theme::GruvboxDark,
            plot_area: None,
        }
    }

    /// Attach the formula shown in the title.
    pub fn with_formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = Some(formula.into());
        self
    }

    /// Plot title.
    pub fn title(&self) -> String {
        let label = self.controller.function().label();
        match &self.formula {
            Some(formula) => format!("{}: {}", label, formula),
            None => label,
        }
    }

    /// Whether the session has ended.
    pub fn should_quit(&self) -> bool {
        self.controller.renderer().is_closed()
    }

    /// Domain coordinate under a terminal cell, `None` outside the plot.
    pub fn pointer_x(&self, column: u16, row: u16) -> Option<f64> {
        let area = self.plot_area?;
        column_to_x(area, column, row, self.controller.domain())
    }

    /// Pointer moved to a terminal cell.
    pub fn mouse_moved(&mut self, column: u16, row: u16) {
        let x = self.pointer_x(column, row);
        self.dispatch(PlotEvent::PointerMove { x });
    }

    /// Pointer button pressed on a terminal cell.
    pub fn mouse_down(&mut self, column: u16, row: u16, button: PointerButton) {
        let x = self.pointer_x(column, row);
        self.dispatch(PlotEvent::PointerClick { x, button });
    }

    /// Key handled by the controller.
    pub fn key(&mut self, key: PlotKey) {
        self.dispatch(PlotEvent::KeyPress(key));
    }

    /// Move the keyboard cursor by `steps` cursor positions.
    pub fn move_cursor(&mut self, steps: i32) {
        let domain = *self.controller.domain();
        let step = domain.width() / self.controller.config().plot.cursor_steps as f64;
        let x = self
            .controller
            .indicator_x()
            .unwrap_or_else(|| domain.x_min() + domain.width() / 2.0);
        let x = domain.clamp_x(x + step * f64::from(steps));
        self.dispatch(PlotEvent::PointerMove { x: Some(x) });
    }

    /// Trace an orbit from the keyboard cursor.
    pub fn select_at_cursor(&mut self) {
        match self.controller.indicator_x() {
            Some(x) => self.dispatch(PlotEvent::PointerClick {
                x: Some(x),
                button: PointerButton::Left,
            }),
            None => self.set_status("Move the cursor with h/l first"),
        }
    }

    /// Trace an orbit from `x0` directly.
    pub fn run(&mut self, x0: f64) {
        self.dispatch(PlotEvent::PointerClick {
            x: Some(x0),
            button: PointerButton::Left,
        });
    }

    /// Remove the orbit overlay.
    pub fn clear_orbit(&mut self) {
        self.controller.redraw();
        self.set_status("Orbit cleared");
    }

    /// Copy the current orbit to the clipboard.
    pub fn copy_orbit(&mut self) {
        let Some(orbit) = self.controller.orbit() else {
            self.set_status("No orbit to copy");
            return;
        };
        let len = orbit.len();
        match clipboard::copy_to_clipboard(&orbit.to_text()) {
            Ok(_) => self.set_status(format!("Copied {} iterates!", len)),
            Err(e) => {
                tracing::error!("Copy failed: {}", e);
                self.set_error(format!("Copy failed: {}", e));
            }
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.set_status(format!("Theme: {}", self.theme.name()));
    }

    /// Show key help in the status bar.
    pub fn show_help(&mut self) {
        self.set_status("Help: click/Enter=orbit, h/l=cursor, ↑/↓=parameter, c=clear, y=copy orbit, T=theme, q/Esc=quit");
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status = message.into();
        self.status_is_error = true;
    }

    fn dispatch(&mut self, event: PlotEvent) {
        let response = self.controller.handle(event);
        self.report(response);
    }

    fn report(&mut self, response: Response) {
        match response {
            Response::Ignored | Response::IndicatorMoved(_) => {}
            Response::OrbitDrawn {
                start,
                len,
                last,
                termination,
            } => {
                let ending = match termination {
                    Termination::Converged => "converged",
                    Termination::Capped => "length cap reached",
                };
                self.set_status(format!(
                    "Orbit from {}: {} iterates, last {} ({})",
                    format_value(start),
                    len,
                    format_value(last),
                    ending
                ));
            }
            Response::Rejected(err) => self.set_error(err.to_string()),
            Response::Redrawn { parameter } => {
                self.set_status(format!("Parameter: {}", format_value(parameter)));
            }
            Response::Closed => self.set_status("Closing"),
        }
    }
}

/// Map a terminal cell inside `area` to a horizontal domain coordinate,
/// using the center of the cell.
pub fn column_to_x(area: Rect, column: u16, row: u16, domain: &Domain) -> Option<f64> {
    let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
    let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
    if !inside_x || !inside_y {
        return None;
    }
    let offset = f64::from(column - area.x) + 0.5;
    Some(domain.x_min() + offset / f64::from(area.width) * domain.width())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::SessionState;
    use crate::map::MapKind;

    fn app() -> App {
        let mut app = App::new(MapKind::Logistic.build(None), Domain::default(), Config::default());
        app.plot_area = Some(Rect::new(1, 1, 100, 20));
        app
    }

    #[test]
    fn column_mapping_uses_cell_centers() {
        let area = Rect::new(10, 5, 4, 2);
        let domain = Domain::default();
        assert_eq!(column_to_x(area, 10, 5, &domain), Some(0.125));
        assert_eq!(column_to_x(area, 13, 6, &domain), Some(0.875));
        assert_eq!(column_to_x(area, 14, 5, &domain), None);
        assert_eq!(column_to_x(area, 9, 5, &domain), None);
        assert_eq!(column_to_x(area, 11, 7, &domain), None);
    }

    #[test]
    fn no_pointer_coordinates_before_first_frame() {
        let mut app = app();
        app.plot_area = None;
        assert_eq!(app.pointer_x(5, 5), None);
    }

    #[test]
    fn click_inside_plot_traces_orbit() {
        let mut app = app();
        app.mouse_down(21, 5, PointerButton::Left);
        let orbit = app.controller.orbit().expect("orbit traced");
        assert!((orbit.start() - 0.205).abs() < 1e-12);
        assert!(app.status.starts_with("Orbit from"));
    }

    #[test]
    fn click_outside_plot_does_nothing() {
        let mut app = app();
        app.mouse_down(0, 0, PointerButton::Left);
        assert!(app.controller.orbit().is_none());
        assert_eq!(app.controller.state(), SessionState::Idle);
    }

    #[test]
    fn rejected_orbit_reported_in_status() {
        let mut app = App::new(MapKind::Doubling.build(None), Domain::default(), Config::default());
        app.run(0.6);
        assert_eq!(app.status, "Value out of bounds: 1.2 not within [0, 1].");
        assert!(app.status_is_error);
        assert!(app.controller.orbit().is_none());
    }

    #[test]
    fn successful_orbit_clears_error_status() {
        let f = MapFunction::fixed("escape", |x| if x < 0.5 { x / 2.0 } else { 2.0 * x });
        let mut app = App::new(f, Domain::default(), Config::default());
        app.run(0.6);
        assert!(app.status_is_error);

        app.run(0.4);
        assert!(!app.status_is_error);
        assert!(app.status.starts_with("Orbit from"));
    }

    #[test]
    fn keyboard_cursor_starts_mid_domain_and_clamps() {
        let mut app = app();
        app.move_cursor(1);
        assert!((app.controller.indicator_x().unwrap() - 0.505).abs() < 1e-12);
        app.move_cursor(1000);
        assert_eq!(app.controller.indicator_x(), Some(1.0));
        app.select_at_cursor();
        // x = 1 maps to 0 under the logistic map and stays there.
        assert_eq!(app.controller.orbit().unwrap().values(), &[1.0, 0.0]);
    }

    #[test]
    fn select_without_cursor_sets_hint() {
        let mut app = app();
        app.select_at_cursor();
        assert!(app.controller.orbit().is_none());
        assert!(app.status.contains("cursor"));
    }

    #[test]
    fn parameter_keys_update_status_and_title() {
        let mut app = app().with_formula("r·x·(1−x)");
        app.key(PlotKey::Up);
        assert_eq!(app.status, "Parameter: 3.8000");
        assert_eq!(app.title(), "logistic (p = 3.800): r·x·(1−x)");
    }

    #[test]
    fn escape_quits() {
        let mut app = app();
        assert!(!app.should_quit());
        app.key(PlotKey::Escape);
        assert!(app.should_quit());
    }

    #[test]
    fn clear_orbit_removes_overlay() {
        let mut app = app();
        app.run(0.2);
        assert!(app.controller.orbit().is_some());
        app.clear_orbit();
        assert!(app.controller.orbit().is_none());
        assert_eq!(app.controller.renderer().len(), 2);
    }

    #[test]
    fn copy_without_orbit_is_reported() {
        let mut app = app();
        app.copy_orbit();
        assert_eq!(app.status, "No orbit to copy");
    }

    #[test]
    fn theme_cycles() {
        let mut app = app();
        app.cycle_theme();
        assert_eq!(app.theme, Theme::GruvboxLight);
        app.cycle_theme();
        assert_eq!(app.theme, Theme::GruvboxDark);
    }
}
