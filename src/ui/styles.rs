use std::borrow::Cow;

use ratatui::prelude::Stylize;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

/// Accent color used for headers, highlights, and selected values.
pub const ACCENT: Color = Color::Indexed(135);

/// Palette cycled through chart series (one color per type or brand).
pub const SERIES_COLORS: [Color; 6] = [
    Color::LightMagenta,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightCyan,
    Color::LightBlue,
    Color::LightRed,
];

pub fn series_color(index: usize) -> Color {
    SERIES_COLORS[index % SERIES_COLORS.len()]
}

/// Build a styled text block for headers.
pub fn header_text<'a>(text: impl Into<Cow<'a, str>>) -> Text<'a> {
    let owned = text.into().into_owned();
    Text::from(owned.bold().fg(ACCENT))
}

/// Produce a dimmed line for secondary descriptions and hints.
pub fn secondary_line<'a>(text: impl Into<Cow<'a, str>>) -> Line<'a> {
    let owned = text.into().into_owned();
    Line::from(owned.dim())
}

/// Dimmed text chunk for inline usage.
pub fn secondary_span<'a>(text: impl Into<Cow<'a, str>>) -> Span<'a> {
    let owned = text.into().into_owned();
    Span::from(owned).dim()
}

/// Style applied to the focused entry of a selectable list.
pub fn selection_style() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Style for warning paragraphs (missing files, empty sections).
pub fn warning_style() -> Style {
    Style::default().fg(Color::Yellow)
}
