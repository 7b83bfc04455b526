//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, adjustable: bool, colors: &ThemeColors) {
    let keymap_text = if adjustable {
        "click:orbit | h/l:cursor | Enter:orbit | ↑↓:param | c:clear | y:copy | T:theme | q/Esc:quit"
    } else {
        "click:orbit | h/l:cursor | Enter:orbit | c:clear | y:copy | T:theme | q/Esc:quit"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
