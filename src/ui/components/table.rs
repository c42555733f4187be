use ratatui::layout::Alignment;
use ratatui::text::{Line, Text};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table},
};

pub fn build_table<'a>(
    rows: Vec<Row<'a>>,
    header: Row<'a>,
    widths: Vec<Constraint>,
    title: impl Into<String>,
) -> Table<'a> {
    Table::new(rows, widths)
        .header(header.style(Style::default().add_modifier(Modifier::BOLD)))
        .block(Block::default().borders(Borders::ALL).title(title.into()))
        .column_spacing(2)
}

/// Right-aligned cell for amounts and counts.
pub fn numeric_cell(text: String) -> Cell<'static> {
    Cell::from(Text::from(Line::from(text).alignment(Alignment::Right)))
}
