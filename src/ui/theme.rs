//! Color themes for the UI.

use crate::app::Theme;
use crate::render::SeriesKind;
use ratatui::style::Color;

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg: Color,
    /// Primary text color.
    pub text: Color,
    /// Heading text color.
    pub heading: Color,
    /// Border color.
    pub border: Color,
    /// Status bar foreground color.
    pub status_fg: Color,
    /// Status bar background color.
    pub status_bg: Color,
    /// Map curve color.
    pub curve: Color,
    /// Identity line color.
    pub identity: Color,
    /// Cobweb path and marker color.
    pub orbit: Color,
    /// Position indicator color.
    pub indicator: Color,
    /// Error color.
    pub error: Color,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg: Color::Rgb(40, 40, 40),
                text: Color::Rgb(235, 219, 178),
                heading: Color::Rgb(251, 184, 108),
                border: Color::Rgb(102, 92, 84),
                status_fg: Color::Rgb(235, 219, 178),
                status_bg: Color::Rgb(60, 56, 54),
                curve: Color::Rgb(131, 165, 152),
                identity: Color::Rgb(168, 153, 132),
                orbit: Color::Rgb(251, 73, 52),
                indicator: Color::Rgb(142, 192, 124),
                error: Color::Rgb(251, 73, 52),
            },
            Theme::GruvboxLight => Self {
                bg: Color::Rgb(251, 245, 234),
                text: Color::Rgb(60, 56, 54),
                heading: Color::Rgb(175, 58, 3),
                border: Color::Rgb(213, 196, 161),
                status_fg: Color::Rgb(60, 56, 54),
                status_bg: Color::Rgb(235, 219, 178),
                curve: Color::Rgb(7, 102, 120),
                identity: Color::Rgb(60, 56, 54),
                orbit: Color::Rgb(157, 0, 6),
                indicator: Color::Rgb(66, 123, 88),
                error: Color::Rgb(157, 0, 6),
            },
        }
    }

    /// Color for a plotted series.
    pub fn series(&self, kind: SeriesKind) -> Color {
        match kind {
            SeriesKind::Curve => self.curve,
            SeriesKind::Identity => self.identity,
            SeriesKind::OrbitPath | SeriesKind::OrbitMarkers => self.orbit,
            SeriesKind::Indicator => self.indicator,
        }
    }
}
