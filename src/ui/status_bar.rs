//! Status bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar; failures are shown in the error color.
pub(super) fn draw_status(
    f: &mut Frame<'_>,
    area: Rect,
    status: &str,
    is_error: bool,
    colors: &ThemeColors,
) {
    let fg = if is_error { colors.error } else { colors.status_fg };
    let paragraph =
        Paragraph::new(status.to_string()).style(Style::default().fg(fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Theme;
    use ratatui::{backend::TestBackend, Terminal};

    fn first_cell_fg(is_error: bool) -> ratatui::style::Color {
        let colors = ThemeColors::from_theme(&Theme::GruvboxDark);
        let mut terminal = Terminal::new(TestBackend::new(20, 1)).unwrap();
        terminal
            .draw(|f| draw_status(f, f.area(), "status", is_error, &colors))
            .unwrap();
        terminal.backend().buffer()[(0, 0)].fg
    }

    #[test]
    fn error_status_uses_error_color() {
        let colors = ThemeColors::from_theme(&Theme::GruvboxDark);
        assert_eq!(first_cell_fg(true), colors.error);
        assert_eq!(first_cell_fg(false), colors.status_fg);
    }
}
