//! User interface rendering.

mod formatters;
mod keymap_bar;
mod plot;
mod status_bar;
mod theme;

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use formatters::{format_axis_label, format_value};
pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Plot, status bar, key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    let title = app.title();
    let controller = &app.controller;
    let inner = plot::draw_plot(
        f,
        chunks[0],
        &title,
        controller.renderer(),
        controller.domain(),
        &colors,
    );
    app.plot_area = Some(inner);

    status_bar::draw_status(f, chunks[1], &app.status, app.status_is_error, &colors);
    keymap_bar::draw_keymap(
        f,
        chunks[2],
        app.controller.function().is_adjustable(),
        &colors,
    );
}
