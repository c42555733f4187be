use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{prelude::*, widgets::*};
use std::time::Duration;

use crate::app::AppContext;
use crate::error::Result;
use crate::ui::components::utils::split_vertical;
use crate::ui::styles::{header_text, secondary_line, warning_style};
use crate::ui::{Section, TerminalGuard};

/// Top-level section selector. Returns `None` when the user quits.
pub fn run_section_menu(ctx: &AppContext) -> Result<Option<Section>> {
    // Ensure raw mode and the alternate screen are always restored regardless of how we exit.
    let mut guard = TerminalGuard::new()?;

    let mut selected = 0usize;
    let entry_count = Section::ALL.len() + 1;
    let warning_lines = ctx.warnings().len().min(6) as u16;

    loop {
        guard.terminal_mut().draw(|f| {
            let size = f.size();
            let chunks = split_vertical(
                size,
                &[
                    Constraint::Length(2),
                    Constraint::Min(1),
                    Constraint::Length(warning_lines),
                    Constraint::Length(1),
                ],
            );

            f.render_widget(
                Paragraph::new(header_text("Transaction Insights Dashboard")),
                chunks[0],
            );

            let mut list_items: Vec<ListItem> = Section::ALL
                .iter()
                .map(|section| {
                    let status = if ctx.section_has_data(*section) {
                        Span::raw("")
                    } else {
                        Span::styled("  (no data)", warning_style())
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(
                            format!("{:<24}", section.title()),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(section.description(), Style::default().fg(Color::Gray)),
                        status,
                    ]))
                })
                .collect();
            list_items.push(ListItem::new(Line::from(Span::styled(
                format!("{:<24}", "Quit"),
                Style::default().add_modifier(Modifier::BOLD),
            ))));

            let list_items: Vec<ListItem> = list_items
                .into_iter()
                .enumerate()
                .map(|(i, item)| {
                    if i == selected {
                        item.style(Style::default().add_modifier(Modifier::REVERSED))
                    } else {
                        item
                    }
                })
                .collect();

            f.render_widget(
                List::new(list_items).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Select Section (↑/↓ or j/k)"),
                ),
                chunks[1],
            );

            if warning_lines > 0 {
                let lines: Vec<Line> = ctx
                    .warnings()
                    .iter()
                    .take(warning_lines as usize)
                    .map(|w| Line::from(Span::styled(format!("⚠ {w}"), warning_style())))
                    .collect();
                f.render_widget(Paragraph::new(lines), chunks[2]);
            }

            f.render_widget(
                Paragraph::new(secondary_line(
                    "↑/↓ or j/k navigate • Enter select • q quit • Ctrl+C exit",
                )),
                chunks[3],
            );
        })?;

        if event::poll(Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Up | KeyCode::Char('k') => {
                        selected = if selected == 0 {
                            entry_count - 1
                        } else {
                            selected - 1
                        };
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        selected = (selected + 1) % entry_count;
                    }
                    KeyCode::Enter => {
                        return Ok(Section::ALL.get(selected).copied());
                    }
                    KeyCode::Esc | KeyCode::Char('q') => return Ok(None),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(None);
                    }
                    _ => {}
                }
            }
        }
    }
}
