use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem},
};

use crate::ui::styles::selection_style;

/// Bordered single-choice list used by the year/quarter pickers. The border
/// brightens on the focused picker so Tab targets are obvious.
pub fn select_list<'a>(
    title: &'a str,
    labels: &[String],
    selected: usize,
    focused: bool,
) -> List<'a> {
    let items: Vec<ListItem> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let marker = if i == selected { "► " } else { "  " };
            let mut item = ListItem::new(format!("{marker}{label}"));
            if i == selected {
                item = item.style(selection_style());
            }
            item
        })
        .collect();

    let border_style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    )
}
