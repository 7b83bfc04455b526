//! Cobweb plot rendering.

use super::formatters::format_axis_label;
use super::ThemeColors;
use crate::domain::Domain;
use crate::render::PlotSurface;
use ratatui::{
    layout::Rect,
    style::Style,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Line as CanvasLine, Points},
        Block, Borders,
    },
    Frame,
};

/// Paint every series on the surface. Returns the inner canvas area, which
/// is the region pointer coordinates are resolved against.
pub(super) fn draw_plot(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    surface: &PlotSurface,
    domain: &Domain,
    colors: &ThemeColors,
) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title(format!(" {} ", title))
        .title_style(Style::default().fg(colors.heading))
        .title_bottom(format!(
            " x ∈ [{}, {}]  y ∈ [{}, {}] ",
            format_axis_label(domain.x_min()),
            format_axis_label(domain.x_max()),
            format_axis_label(domain.y_min()),
            format_axis_label(domain.y_max()),
        ));
    let inner = block.inner(area);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .background_color(colors.bg)
        .x_bounds([domain.x_min(), domain.x_max()])
        .y_bounds([domain.y_min(), domain.y_max()])
        .paint(|ctx| {
            for series in surface.layers() {
                let color = colors.series(series.kind);
                if series.kind.is_scatter() || series.points.len() == 1 {
                    ctx.draw(&Points {
                        coords: &series.points,
                        color,
                    });
                } else {
                    for segment in series.points.windows(2) {
                        ctx.draw(&CanvasLine {
                            x1: segment[0].0,
                            y1: segment[0].1,
                            x2: segment[1].0,
                            y2: segment[1].1,
                            color,
                        });
                    }
                }
                ctx.layer();
            }
        });

    f.render_widget(canvas, area);
    inner
}
